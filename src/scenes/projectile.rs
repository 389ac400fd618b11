use std::collections::VecDeque;

use glam::{DVec3, Vec3};

use crate::core::Accumulator;
use crate::frame::FrameInfo;
use crate::geometry::Geometry;
use crate::math::hex_to_rgb;
use crate::physics::{AdvancedProjectile, ProjectileState};
use crate::scene::{ObjectId, Scene, SceneObject};

use super::chaotic_pendulum::{MAX_STEPS_PER_TICK, SIMULATION_HZ};

pub const LAUNCH_SPEED: f64 = 50.0;
pub const LAUNCH_ELEVATION: f64 = 45.0;
/// Trail markers kept behind the ball
pub const TRAIL_LEN: usize = 24;
/// Simulation steps between trail samples
const TRAIL_EVERY: u32 = 4;

/// Scene units per simulated metre
const SCALE: f32 = 0.07;
const LAUNCH: Vec3 = Vec3::new(-1.0, -2.5, 0.0);

/// Ball in flight with a trail of recent positions; relaunches on touchdown
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileRig {
    pub ball: ObjectId,
    pub trail: Vec<ObjectId>,
    model: AdvancedProjectile,
    state: ProjectileState,
    samples: VecDeque<DVec3>,
    steps: u32,
    apex: f64,
    flights: u32,
    clock: Accumulator,
}

fn to_scene(position: DVec3) -> Vec3 {
    LAUNCH + position.as_vec3() * SCALE
}

/// Ball at the launch point, trail markers tucked inside it
pub fn create_projectile_scene() -> (Scene, ProjectileRig) {
    let mut scene = Scene::new();
    let ball = scene.add(SceneObject::new("ball", Geometry::sphere(0.12), hex_to_rgb(0x58a6ff)).at(LAUNCH));
    let trail = (0..TRAIL_LEN)
        .map(|_| scene.add(SceneObject::new("trail", Geometry::sphere(0.04), hex_to_rgb(0xff5858)).at(LAUNCH)))
        .collect();

    let model = AdvancedProjectile::default();
    let launch = ProjectileState::launch(LAUNCH_SPEED, LAUNCH_ELEVATION);
    let forecast = model.fly(launch, 1.0 / f64::from(SIMULATION_HZ), 30.0);
    log::debug!(
        "projectile forecast: apex {:.2} m, range {:.2} m, drift {:.2} m after {:.2} s",
        forecast.max_height,
        forecast.range,
        forecast.drift,
        forecast.time
    );

    let rig = ProjectileRig {
        ball,
        trail,
        model,
        state: launch,
        samples: VecDeque::with_capacity(TRAIL_LEN),
        steps: 0,
        apex: 0.0,
        flights: 0,
        clock: Accumulator::new(SIMULATION_HZ, MAX_STEPS_PER_TICK),
    };
    (scene, rig)
}

impl ProjectileRig {
    pub fn update(&mut self, scene: &mut Scene, frame: &FrameInfo) {
        for dt in self.clock.tick(frame.delta) {
            self.advance(f64::from(dt));
        }
        self.pose(scene);
    }

    fn advance(&mut self, dt: f64) {
        self.state = self.model.step(&self.state, dt);
        self.apex = self.apex.max(self.state.position.y);

        if self.state.position.y < 0.0 {
            self.flights += 1;
            log::debug!(
                "flight {} landed at ({:.2}, {:.2}) m, apex {:.2} m",
                self.flights,
                self.state.position.x,
                self.state.position.z,
                self.apex
            );
            self.state = ProjectileState::launch(LAUNCH_SPEED, LAUNCH_ELEVATION);
            self.samples.clear();
            self.steps = 0;
            self.apex = 0.0;
            return;
        }

        self.steps += 1;
        if self.steps % TRAIL_EVERY == 0 {
            if self.samples.len() == TRAIL_LEN {
                self.samples.pop_front();
            }
            self.samples.push_back(self.state.position);
        }
    }

    fn pose(&self, scene: &mut Scene) {
        let ball = to_scene(self.state.position);
        scene.transform_mut(self.ball).position = ball;

        // Unfilled markers hide inside the ball
        for (i, &id) in self.trail.iter().enumerate() {
            scene.transform_mut(id).position = self.samples.get(i).copied().map_or(ball, to_scene);
        }
    }
}
