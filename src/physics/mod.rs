mod pendulum;
mod projectile;

pub use pendulum::{DoublePendulum, PendulumState};
pub use projectile::{AdvancedProjectile, FlightSummary, ProjectileState};
