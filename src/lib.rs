//! # safety-motion
//!
//! Jerk-limited three-phase motion segments for real-time robot safety
//! verification.
//!
//! ## Features
//!
//! - **Closed-form kinematics**: position, velocity and acceleration of a
//!   constant-jerk profile evaluated exactly, phase by phase
//! - **Real-time friendly**: no allocation, no blocking, bounded work per call
//! - **Safety queries**: terminal state, earliest velocity-threshold crossing
//!   and maximum velocity of a candidate segment
//! - **no_std compatible**: Core library works without standard library
//! - **Configuration-driven**: Define named paths in TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safety_motion::{MotionState, Path};
//!
//! // Brake from 5 to 1 over 1.5 s with acceleration returning to zero
//! let mut path = Path::from_parts(
//!     [0.5, 1.0, 1.5],
//!     [-8.0, 0.0, 8.0],
//!     MotionState::new(0.0, 5.0, 0.0, 0.0),
//! )?;
//!
//! let end = path.final_motion();
//! let crossing = path.motion_under_velocity(3.0);
//! let peak = path.max_velocity();
//!
//! // One control tick
//! path.advance(0.001)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod kinematics;
pub mod path;

// Re-exports for ergonomic API
pub use config::{validate_config, PathConfig, SystemConfig};
pub use error::{ConfigError, Error, PathError, Result};
pub use kinematics::MotionState;
pub use path::{FinalMotion, Path, PathExecutor, TailPolicy, VelocityCrossing, PHASE_COUNT};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
