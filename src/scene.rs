use glam::{EulerRot, Mat4, Vec3};

use crate::geometry::Geometry;
use crate::math::Rgb;

/// Index of an object within its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

/// Position plus XYZ Euler rotation (radians), relative to the parent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self { position, rotation: Vec3::ZERO }
    }

    /// Local-to-parent matrix: translate after rotating
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Unlit colored primitive placed in a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub geometry: Geometry,
    pub color: Rgb,
    pub transform: Transform,
    pub parent: Option<ObjectId>,
}

impl SceneObject {
    pub fn new(name: &'static str, geometry: Geometry, color: Rgb) -> Self {
        Self {
            name,
            geometry,
            color,
            transform: Transform::default(),
            parent: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }
}

/// Flat object list with parent links
///
/// Parents are always inserted before their children, so a forward walk
/// visits every parent first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root object
    pub fn add(&mut self, mut object: SceneObject) -> ObjectId {
        object.parent = None;
        self.push(object)
    }

    /// Add an object whose transform is relative to `parent`
    pub fn add_child(&mut self, parent: ObjectId, mut object: SceneObject) -> ObjectId {
        debug_assert!(parent.0 < self.objects.len());
        object.parent = Some(parent);
        self.push(object)
    }

    fn push(&mut self, object: SceneObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> &SceneObject {
        &self.objects[id.0]
    }

    pub fn transform(&self, id: ObjectId) -> &Transform {
        &self.objects[id.0].transform
    }

    pub fn transform_mut(&mut self, id: ObjectId) -> &mut Transform {
        &mut self.objects[id.0].transform
    }

    /// Local-to-world matrix with all ancestors composed
    pub fn world_matrix(&self, id: ObjectId) -> Mat4 {
        let object = &self.objects[id.0];
        match object.parent {
            Some(parent) => self.world_matrix(parent) * object.transform.matrix(),
            None => object.transform.matrix(),
        }
    }

    /// Objects paired with their world matrices, parents first
    pub fn world_objects(&self) -> Vec<(&SceneObject, Mat4)> {
        let mut worlds: Vec<Mat4> = Vec::with_capacity(self.objects.len());
        for object in &self.objects {
            let local = object.transform.matrix();
            let world = match object.parent {
                Some(parent) => worlds[parent.0] * local,
                None => local,
            };
            worlds.push(world);
        }
        self.objects.iter().zip(worlds).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::hex_to_rgb;

    fn unit(name: &'static str) -> SceneObject {
        SceneObject::new(name, Geometry::cube(), hex_to_rgb(0xffffff))
    }

    #[test]
    fn transform_translates_after_rotating() {
        let t = Transform {
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
        };
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn child_composes_with_parent() {
        let mut scene = Scene::new();
        let parent = scene.add(unit("parent").at(Vec3::new(0.0, 1.0, 0.0)));
        let child = scene.add_child(parent, unit("child").at(Vec3::new(0.0, -1.0, 0.0)));

        let origin = scene.world_matrix(child).transform_point3(Vec3::ZERO);
        assert!(origin.length() < 1e-6);

        // Rotating the parent swings the child around the parent's origin
        scene.transform_mut(parent).rotation.z = std::f32::consts::FRAC_PI_2;
        let origin = scene.world_matrix(child).transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn world_objects_matches_world_matrix() {
        let mut scene = Scene::new();
        let a = scene.add(unit("a").at(Vec3::new(0.5, 1.0, 0.0)));
        let b = scene.add_child(a, unit("b").at(Vec3::new(0.0, -1.0, 0.0)));
        scene.transform_mut(a).rotation = Vec3::new(0.1, 0.2, 0.3);
        scene.transform_mut(b).rotation.z = 0.4;

        let worlds = scene.world_objects();
        assert_eq!(worlds.len(), 2);
        assert!(worlds[0].1.abs_diff_eq(scene.world_matrix(a), 1e-6));
        assert!(worlds[1].1.abs_diff_eq(scene.world_matrix(b), 1e-6));
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut scene = Scene::new();
        let first = scene.add(unit("first"));
        let second = scene.add_child(first, unit("second"));
        assert_ne!(first, second);
        assert_eq!(scene.get(second).parent, Some(first));
        assert_eq!(scene.get(second).name, "second");
        assert_eq!(scene.len(), 2);
    }
}
