//! Unit test harness for safety-motion.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod path_properties;
