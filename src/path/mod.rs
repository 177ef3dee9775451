//! Path module for safety-motion.
//!
//! A [`Path`] is a one-dimensional motion segment made of three consecutive
//! constant-jerk phases, together with the queries the safety verification
//! runs against candidate segments and an executor for the active one.

mod executor;
mod query;
mod segment;

pub use executor::PathExecutor;
pub use query::{FinalMotion, VelocityCrossing};
pub use segment::{Path, TailPolicy, PHASE_COUNT};
