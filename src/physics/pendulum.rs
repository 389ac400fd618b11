//! Planar double pendulum integrated with classic RK4.
//!
//! Angles are measured from the downward vertical; positive is
//! counter-clockwise when viewed from +Z.

use std::f64::consts::FRAC_PI_2;

/// (theta1, omega1, theta2, omega2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    pub theta1: f64,
    pub omega1: f64,
    pub theta2: f64,
    pub omega2: f64,
}

impl PendulumState {
    pub const fn new(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Self {
        Self { theta1, omega1, theta2, omega2 }
    }

    /// Both arms horizontal, at rest
    pub const fn horizontal() -> Self {
        Self::new(FRAC_PI_2, 0.0, FRAC_PI_2, 0.0)
    }

    fn offset(&self, d: &PendulumState, h: f64) -> Self {
        Self {
            theta1: self.theta1 + d.theta1 * h,
            omega1: self.omega1 + d.omega1 * h,
            theta2: self.theta2 + d.theta2 * h,
            omega2: self.omega2 + d.omega2 * h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoublePendulum {
    pub m1: f64,
    pub m2: f64,
    pub l1: f64,
    pub l2: f64,
    pub g: f64,
}

impl Default for DoublePendulum {
    fn default() -> Self {
        Self { m1: 1.0, m2: 1.0, l1: 1.0, l2: 1.0, g: 9.81 }
    }
}

impl DoublePendulum {
    /// Time derivative of the state
    pub fn derivatives(&self, s: &PendulumState) -> PendulumState {
        let Self { m1, m2, l1, l2, g } = *self;
        let delta = s.theta2 - s.theta1;
        let (sin_d, cos_d) = delta.sin_cos();

        let den1 = (m1 + m2) * l1 - m2 * l1 * cos_d * cos_d;
        let den2 = (l2 / l1) * den1;

        let omega1_dot = (m2 * l1 * s.omega1 * s.omega1 * sin_d * cos_d
            + m2 * g * s.theta2.sin() * cos_d
            + m2 * l2 * s.omega2 * s.omega2 * sin_d
            - (m1 + m2) * g * s.theta1.sin())
            / den1;

        let omega2_dot = (-m2 * l2 * s.omega2 * s.omega2 * sin_d * cos_d
            + (m1 + m2)
                * (g * s.theta1.sin() * cos_d
                    - l1 * s.omega1 * s.omega1 * sin_d
                    - g * s.theta2.sin()))
            / den2;

        PendulumState::new(s.omega1, omega1_dot, s.omega2, omega2_dot)
    }

    /// Advance one RK4 step of length `dt`
    pub fn step(&self, s: &PendulumState, dt: f64) -> PendulumState {
        let k1 = self.derivatives(s);
        let k2 = self.derivatives(&s.offset(&k1, dt * 0.5));
        let k3 = self.derivatives(&s.offset(&k2, dt * 0.5));
        let k4 = self.derivatives(&s.offset(&k3, dt));

        let blend = |a: f64, b: f64, c: f64, d: f64| (a + 2.0 * b + 2.0 * c + d) * dt / 6.0;
        PendulumState {
            theta1: s.theta1 + blend(k1.theta1, k2.theta1, k3.theta1, k4.theta1),
            omega1: s.omega1 + blend(k1.omega1, k2.omega1, k3.omega1, k4.omega1),
            theta2: s.theta2 + blend(k1.theta2, k2.theta2, k3.theta2, k4.theta2),
            omega2: s.omega2 + blend(k1.omega2, k2.omega2, k3.omega2, k4.omega2),
        }
    }

    /// Bob positions relative to the pivot, y up
    pub fn positions(&self, s: &PendulumState) -> ((f64, f64), (f64, f64)) {
        let x1 = self.l1 * s.theta1.sin();
        let y1 = -self.l1 * s.theta1.cos();
        let x2 = x1 + self.l2 * s.theta2.sin();
        let y2 = y1 - self.l2 * s.theta2.cos();
        ((x1, y1), (x2, y2))
    }

    /// Kinetic plus potential energy, zero potential at the pivot
    pub fn energy(&self, s: &PendulumState) -> f64 {
        let Self { m1, m2, l1, l2, g } = *self;
        let ((_, y1), (_, y2)) = self.positions(s);

        let v1_sq = (l1 * s.omega1).powi(2);
        let v2_sq = v1_sq
            + (l2 * s.omega2).powi(2)
            + 2.0 * l1 * l2 * s.omega1 * s.omega2 * (s.theta1 - s.theta2).cos();

        0.5 * m1 * v1_sq + 0.5 * m2 * v2_sq + m1 * g * y1 + m2 * g * y2
    }
}
