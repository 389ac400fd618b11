use glam::Vec3;

use crate::frame::FrameInfo;
use crate::geometry::Geometry;
use crate::math::hex_to_rgb;
use crate::scene::{ObjectId, Scene, SceneObject};

pub const SWING: f32 = 0.5;

/// Upper arm and the arm hanging from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkedArmsRig {
    pub upper: ObjectId,
    pub lower: ObjectId,
}

/// Two-segment chain; the lower arm's transform is relative to the upper
pub fn create_linked_arms_scene() -> (Scene, LinkedArmsRig) {
    let arm = Geometry::cylinder(0.1, 0.1, 2.0);
    let color = hex_to_rgb(0x58a6ff);

    let mut scene = Scene::new();
    let upper = scene.add(SceneObject::new("arm1", arm, color).at(Vec3::new(0.0, 1.0, 0.0)));
    let lower = scene.add_child(upper, SceneObject::new("arm2", arm, color).at(Vec3::new(0.0, -1.0, 0.0)));
    (scene, LinkedArmsRig { upper, lower })
}

impl LinkedArmsRig {
    pub fn update(&self, scene: &mut Scene, frame: &FrameInfo) {
        let (sin, cos) = frame.time.sin_cos();
        scene.transform_mut(self.upper).rotation.z = SWING * sin;
        scene.transform_mut(self.lower).rotation.z = SWING * cos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_arm_is_parented() {
        let (scene, rig) = create_linked_arms_scene();
        assert_eq!(scene.get(rig.upper).parent, None);
        assert_eq!(scene.get(rig.lower).parent, Some(rig.upper));

        // Child origin coincides with the world origin before any swing
        let origin = scene.world_matrix(rig.lower).transform_point3(Vec3::ZERO);
        assert!(origin.length() < 1e-6);
    }

    #[test]
    fn arms_swing_out_of_phase() {
        let (mut scene, rig) = create_linked_arms_scene();
        rig.update(&mut scene, &FrameInfo::new(0, 0.0, 0.0));
        assert_eq!(scene.transform(rig.upper).rotation.z, 0.0);
        assert_eq!(scene.transform(rig.lower).rotation.z, 0.5);
    }
}
