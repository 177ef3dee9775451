//! Path configuration from TOML.

use serde::Deserialize;

use crate::error::Result;
use crate::kinematics::MotionState;
use crate::path::{Path, TailPolicy, PHASE_COUNT};

/// A path definition from configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathConfig {
    /// Cumulative phase end-times in seconds.
    pub phase_end_times: [f64; PHASE_COUNT],

    /// Constant jerk of each phase.
    pub phase_jerks: [f64; PHASE_COUNT],

    /// Starting position.
    #[serde(default)]
    pub position: f64,

    /// Starting velocity.
    #[serde(default = "default_velocity")]
    pub velocity: f64,

    /// Starting acceleration.
    #[serde(default)]
    pub acceleration: f64,

    /// Behavior once the last phase is exhausted.
    #[serde(default)]
    pub tail_policy: TailPolicy,
}

fn default_velocity() -> f64 {
    1.0
}

impl PathConfig {
    /// Build a path from this definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase end-times are invalid.
    pub fn build(&self) -> Result<Path> {
        let state = MotionState::new(self.position, self.velocity, self.acceleration, 0.0);
        Ok(Path::from_parts(self.phase_end_times, self.phase_jerks, state)?
            .with_tail_policy(self.tail_policy))
    }
}
