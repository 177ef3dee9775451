//! Configuration module for safety-motion.
//!
//! Provides types for loading and validating named path definitions from
//! TOML files (with `std` feature) or pre-parsed data.

mod path;
mod system;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use path::PathConfig;
pub use system::{SystemConfig, MAX_PATHS};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
