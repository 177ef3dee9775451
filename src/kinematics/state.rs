//! One-dimensional kinematic state under constant jerk.

/// Position, velocity, acceleration and jerk at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionState {
    /// Position.
    pub position: f64,
    /// Velocity (units/s).
    pub velocity: f64,
    /// Acceleration (units/s²).
    pub acceleration: f64,
    /// Jerk (units/s³).
    pub jerk: f64,
}

impl MotionState {
    /// Create a new motion state.
    #[inline]
    pub const fn new(position: f64, velocity: f64, acceleration: f64, jerk: f64) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            jerk,
        }
    }

    /// State after `dt` seconds of constant `jerk`.
    ///
    /// The returned state carries `jerk` as its jerk, even for `dt == 0`.
    #[inline]
    pub fn integrate(&self, jerk: f64, dt: f64) -> Self {
        let dt2 = dt * dt;
        let dt3 = dt2 * dt;
        Self {
            position: self.position
                + self.velocity * dt
                + self.acceleration * dt2 / 2.0
                + jerk * dt3 / 6.0,
            velocity: self.velocity + self.acceleration * dt + jerk * dt2 / 2.0,
            acceleration: self.acceleration + jerk * dt,
            jerk,
        }
    }

    /// Velocity after `dt` seconds of constant `jerk`.
    #[inline]
    pub fn velocity_after(&self, jerk: f64, dt: f64) -> f64 {
        self.velocity + self.acceleration * dt + jerk * dt * dt / 2.0
    }

    /// Acceleration after `dt` seconds of constant `jerk`.
    #[inline]
    pub fn acceleration_after(&self, jerk: f64, dt: f64) -> f64 {
        self.acceleration + jerk * dt
    }
}
