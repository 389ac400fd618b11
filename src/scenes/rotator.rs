use crate::frame::FrameInfo;
use crate::geometry::Geometry;
use crate::math::hex_to_rgb;
use crate::scene::{ObjectId, Scene, SceneObject};

/// Radians added to the cube's x and y rotation every tick
pub const SPIN_PER_TICK: f32 = 0.01;

/// Handle to the spinning cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatorRig {
    pub cube: ObjectId,
}

/// One unit cube at the origin
pub fn create_rotator_scene() -> (Scene, RotatorRig) {
    let mut scene = Scene::new();
    let cube = scene.add(SceneObject::new("cube", Geometry::cube(), hex_to_rgb(0x58a6ff)));
    (scene, RotatorRig { cube })
}

impl RotatorRig {
    /// Spin is per tick, so speed follows the refresh rate
    pub fn update(&self, scene: &mut Scene, _frame: &FrameInfo) {
        let rotation = &mut scene.transform_mut(self.cube).rotation;
        rotation.x += SPIN_PER_TICK;
        rotation.y += SPIN_PER_TICK;
    }
}
