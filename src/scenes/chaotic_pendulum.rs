use glam::Vec3;

use crate::core::Accumulator;
use crate::frame::FrameInfo;
use crate::geometry::Geometry;
use crate::math::hex_to_rgb;
use crate::physics::{DoublePendulum, PendulumState};
use crate::scene::{ObjectId, Scene, SceneObject};

/// Integration rate of the simulation
pub const SIMULATION_HZ: f32 = 100.0;
/// Step cap per tick after a stall
pub const MAX_STEPS_PER_TICK: u8 = 8;

/// Scene units per simulated metre
const SCALE: f32 = 1.0;
const PIVOT: Vec3 = Vec3::new(0.0, 1.5, 0.0);

/// Simulated double pendulum plus the objects that display it
#[derive(Debug, Clone, PartialEq)]
pub struct ChaoticPendulumRig {
    pub upper_arm: ObjectId,
    pub lower_arm: ObjectId,
    pub upper_bob: ObjectId,
    pub lower_bob: ObjectId,
    pendulum: DoublePendulum,
    state: PendulumState,
    clock: Accumulator,
}

/// Two arms and two bobs posed from the horizontal starting state
pub fn create_chaotic_pendulum_scene() -> (Scene, ChaoticPendulumRig) {
    let pendulum = DoublePendulum::default();
    let arm_color = hex_to_rgb(0x58a6ff);
    let bob_color = hex_to_rgb(0xff5858);

    let mut scene = Scene::new();
    let upper_arm = scene.add(SceneObject::new(
        "arm1",
        Geometry::cylinder(0.05, 0.05, pendulum.l1 as f32 * SCALE),
        arm_color,
    ));
    let lower_arm = scene.add(SceneObject::new(
        "arm2",
        Geometry::cylinder(0.05, 0.05, pendulum.l2 as f32 * SCALE),
        arm_color,
    ));
    let upper_bob = scene.add(SceneObject::new("bob1", Geometry::sphere(0.15), bob_color));
    let lower_bob = scene.add(SceneObject::new("bob2", Geometry::sphere(0.15), bob_color));

    let rig = ChaoticPendulumRig {
        upper_arm,
        lower_arm,
        upper_bob,
        lower_bob,
        pendulum,
        state: PendulumState::horizontal(),
        clock: Accumulator::new(SIMULATION_HZ, MAX_STEPS_PER_TICK),
    };
    rig.pose(&mut scene);
    (scene, rig)
}

impl ChaoticPendulumRig {
    /// Advance the simulation by the frame delta, then pose the objects
    pub fn update(&mut self, scene: &mut Scene, frame: &FrameInfo) {
        for dt in self.clock.tick(frame.delta) {
            self.state = self.pendulum.step(&self.state, f64::from(dt));
        }
        self.pose(scene);
    }

    fn pose(&self, scene: &mut Scene) {
        let ((x1, y1), (x2, y2)) = self.pendulum.positions(&self.state);
        let bob1 = PIVOT + Vec3::new(x1 as f32, y1 as f32, 0.0) * SCALE;
        let bob2 = PIVOT + Vec3::new(x2 as f32, y2 as f32, 0.0) * SCALE;

        // Cylinders run along Y; rotating by theta about Z points them along the arm
        let upper = scene.transform_mut(self.upper_arm);
        upper.position = (PIVOT + bob1) * 0.5;
        upper.rotation.z = self.state.theta1 as f32;

        let lower = scene.transform_mut(self.lower_arm);
        lower.position = (bob1 + bob2) * 0.5;
        lower.rotation.z = self.state.theta2 as f32;

        scene.transform_mut(self.upper_bob).position = bob1;
        scene.transform_mut(self.lower_bob).position = bob2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_both_arms_horizontal() {
        let (scene, rig) = create_chaotic_pendulum_scene();
        assert_eq!(scene.len(), 4);
        assert_eq!(rig.state, PendulumState::horizontal());

        let bob2 = scene.transform(rig.lower_bob).position;
        assert!((bob2 - Vec3::new(2.0, 1.5, 0.0)).length() < 1e-5);

        // Arm end points land on the pivot and the first bob
        let arm = scene.world_matrix(rig.upper_arm);
        let top = arm.transform_point3(Vec3::new(0.0, 0.5, 0.0));
        let bottom = arm.transform_point3(Vec3::new(0.0, -0.5, 0.0));
        assert!((top - PIVOT).length() < 1e-5 || (bottom - PIVOT).length() < 1e-5);
    }

    #[test]
    fn steps_at_fixed_rate() {
        let (mut scene, mut rig) = create_chaotic_pendulum_scene();

        // Less than one step leaves the state alone
        rig.update(&mut scene, &FrameInfo::new(0, 0.0, 0.005));
        assert_eq!(rig.state, PendulumState::horizontal());

        rig.update(&mut scene, &FrameInfo::new(1, 0.02, 0.015));
        assert!(rig.state.theta1 < std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn energy_holds_across_ticks() {
        let (mut scene, mut rig) = create_chaotic_pendulum_scene();
        let initial = rig.pendulum.energy(&rig.state);
        for n in 1..=120 {
            rig.update(&mut scene, &FrameInfo::new(n, n as f32 / 60.0, 1.0 / 60.0));
        }
        assert!((rig.pendulum.energy(&rig.state) - initial).abs() < 1e-2);
    }
}
