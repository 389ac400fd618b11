//! Spinning ball in flight: quadratic drag, altitude-dependent air density,
//! Magnus lift and the Coriolis force, integrated with RK4.
//!
//! Axes: x downrange, y up, z across.

use std::f64::consts::PI;

use glam::DVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileState {
    pub position: DVec3,
    pub velocity: DVec3,
}

impl ProjectileState {
    /// Launch from the origin at `speed` m/s, `elevation` degrees above +x
    pub fn launch(speed: f64, elevation: f64) -> Self {
        let (sin, cos) = elevation.to_radians().sin_cos();
        Self {
            position: DVec3::ZERO,
            velocity: DVec3::new(speed * cos, speed * sin, 0.0),
        }
    }

    fn offset(&self, d: &ProjectileState, h: f64) -> Self {
        Self {
            position: self.position + d.position * h,
            velocity: self.velocity + d.velocity * h,
        }
    }
}

/// Ball and environment parameters (SI units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvancedProjectile {
    pub mass: f64,
    pub radius: f64,
    /// Backspin about +y, rad/s
    pub spin_rate: f64,
    pub g: f64,
    /// Sea-level air density, kg/m³
    pub rho_0: f64,
    /// Density scale height, m
    pub scale_height: f64,
    /// Earth's angular velocity, rad/s
    pub omega_earth: f64,
    pub latitude_degrees: f64,
    pub drag_coefficient: f64,
    pub lift_coefficient: f64,
}

impl Default for AdvancedProjectile {
    /// A baseball at 45° latitude
    fn default() -> Self {
        Self {
            mass: 0.145,
            radius: 0.037,
            spin_rate: 50.0,
            g: 9.81,
            rho_0: 1.225,
            scale_height: 7400.0,
            omega_earth: 7.2921e-5,
            latitude_degrees: 45.0,
            drag_coefficient: 0.47,
            lift_coefficient: 0.33,
        }
    }
}

/// Outcome of a simulated flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSummary {
    pub max_height: f64,
    /// Downrange distance at touchdown (or at the time limit)
    pub range: f64,
    /// Sideways drift at touchdown (or at the time limit)
    pub drift: f64,
    pub time: f64,
    pub landed: bool,
}

impl AdvancedProjectile {
    /// Cross-sectional area
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Exponential atmosphere
    pub fn air_density(&self, y: f64) -> f64 {
        self.rho_0 * (-y / self.scale_height).exp()
    }

    /// Total force on the ball
    pub fn forces(&self, s: &ProjectileState) -> DVec3 {
        let v = s.velocity;
        let speed = v.length();
        let rho = self.air_density(s.position.y);
        let area = self.area();

        let drag = -0.5 * rho * area * self.drag_coefficient * speed * v;

        let spin = DVec3::Y * self.spin_rate;
        let magnus = self.lift_coefficient * area * rho * speed * spin.cross(v);

        let (sin_lat, cos_lat) = self.latitude_degrees.to_radians().sin_cos();
        let omega = DVec3::new(0.0, self.omega_earth * cos_lat, self.omega_earth * sin_lat);
        let coriolis = -2.0 * self.mass * omega.cross(v);

        let gravity = DVec3::new(0.0, -self.mass * self.g, 0.0);

        drag + magnus + coriolis + gravity
    }

    fn derivatives(&self, s: &ProjectileState) -> ProjectileState {
        ProjectileState {
            position: s.velocity,
            velocity: self.forces(s) / self.mass,
        }
    }

    /// Advance one RK4 step of length `dt`
    pub fn step(&self, s: &ProjectileState, dt: f64) -> ProjectileState {
        let k1 = self.derivatives(s);
        let k2 = self.derivatives(&s.offset(&k1, dt * 0.5));
        let k3 = self.derivatives(&s.offset(&k2, dt * 0.5));
        let k4 = self.derivatives(&s.offset(&k3, dt));

        ProjectileState {
            position: s.position
                + (k1.position + 2.0 * k2.position + 2.0 * k3.position + k4.position) * (dt / 6.0),
            velocity: s.velocity
                + (k1.velocity + 2.0 * k2.velocity + 2.0 * k3.velocity + k4.velocity) * (dt / 6.0),
        }
    }

    /// Integrate from `launch` until the ball comes back to y = 0 or
    /// `max_time` runs out
    ///
    /// Touchdown is interpolated between the two steps that straddle the ground.
    pub fn fly(&self, launch: ProjectileState, dt: f64, max_time: f64) -> FlightSummary {
        let mut state = launch;
        let mut max_height = launch.position.y;
        let mut t = 0.0;

        while t < max_time {
            let next = self.step(&state, dt);

            if next.position.y < 0.0 && state.position.y >= 0.0 && t > 0.0 {
                let f = state.position.y / (state.position.y - next.position.y);
                let touchdown = state.position.lerp(next.position, f);
                return FlightSummary {
                    max_height,
                    range: touchdown.x,
                    drift: touchdown.z,
                    time: t + f * dt,
                    landed: true,
                };
            }

            state = next;
            t += dt;
            max_height = max_height.max(state.position.y);
        }

        FlightSummary {
            max_height,
            range: state.position.x,
            drift: state.position.z,
            time: t,
            landed: false,
        }
    }
}
