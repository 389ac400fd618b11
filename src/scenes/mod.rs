mod chaotic_pendulum;
mod linked_arms;
mod pair_motion;
mod projectile;
mod rotator;

pub use chaotic_pendulum::{create_chaotic_pendulum_scene, ChaoticPendulumRig};
pub use linked_arms::{create_linked_arms_scene, LinkedArmsRig};
pub use pair_motion::{create_pair_motion_scene, PairMotionRig};
pub use projectile::{create_projectile_scene, ProjectileRig};
pub use rotator::{create_rotator_scene, RotatorRig, SPIN_PER_TICK};
