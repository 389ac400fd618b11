use glam::Vec3;

use crate::frame::FrameInfo;
use crate::geometry::Geometry;
use crate::math::hex_to_rgb;
use crate::scene::{ObjectId, Scene, SceneObject};

pub const AMPLITUDE: f32 = 2.0;

/// Handles to the two colliding spheres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairMotionRig {
    pub left: ObjectId,
    pub right: ObjectId,
}

/// Two spheres mirrored about the origin
pub fn create_pair_motion_scene() -> (Scene, PairMotionRig) {
    let mut scene = Scene::new();
    let left = scene.add(
        SceneObject::new("sphere1", Geometry::sphere(0.5), hex_to_rgb(0x58a6ff))
            .at(Vec3::new(-AMPLITUDE, 0.0, 0.0)),
    );
    let right = scene.add(
        SceneObject::new("sphere2", Geometry::sphere(0.5), hex_to_rgb(0xff5858))
            .at(Vec3::new(AMPLITUDE, 0.0, 0.0)),
    );
    (scene, PairMotionRig { left, right })
}

impl PairMotionRig {
    pub fn update(&self, scene: &mut Scene, frame: &FrameInfo) {
        let x = AMPLITUDE * frame.time.cos();
        scene.transform_mut(self.left).position.x = -x;
        scene.transform_mut(self.right).position.x = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spheres_start_mirrored() {
        let (scene, rig) = create_pair_motion_scene();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.transform(rig.left).position.x, -2.0);
        assert_eq!(scene.transform(rig.right).position.x, 2.0);
        assert_ne!(scene.get(rig.left).color, scene.get(rig.right).color);
    }

    #[test]
    fn spheres_meet_at_quarter_period() {
        let (mut scene, rig) = create_pair_motion_scene();
        rig.update(&mut scene, &FrameInfo::new(0, std::f32::consts::FRAC_PI_2, 0.0));
        assert!(scene.transform(rig.left).position.x.abs() < 1e-6);
        assert!(scene.transform(rig.right).position.x.abs() < 1e-6);
    }

    #[test]
    fn only_x_moves() {
        let (mut scene, rig) = create_pair_motion_scene();
        rig.update(&mut scene, &FrameInfo::new(3, 1.3, 0.016));
        assert_eq!(scene.transform(rig.left).position.y, 0.0);
        assert_eq!(scene.transform(rig.right).position.z, 0.0);
    }
}
