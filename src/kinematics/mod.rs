//! Kinematics module for safety-motion.
//!
//! Closed-form constant-jerk integration and the root/extremum helpers the
//! path queries are built on.

mod roots;
mod state;

pub use roots::{critical_time, time_to_velocity, ROOT_TOLERANCE};
pub use state::MotionState;
