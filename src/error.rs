//! Error types for safety-motion library.
//!
//! Provides unified error handling across configuration and path operations.
//! A query that finds nothing (e.g. a velocity threshold never reached) is not
//! an error and is reported through `Option` by the query itself.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all safety-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Path precondition violation
    Path(PathError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Path name not found in configuration
    PathNotFound(heapless::String<32>),
    /// Invalid sample time (must be > 0 and finite)
    InvalidSampleTime(f64),
    /// A named path failed validation
    InvalidPath {
        /// Name of the offending path
        name: heapless::String<32>,
        /// Underlying path error
        source: PathError,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Path precondition violations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PathError {
    /// A phase end-time is below zero
    NegativePhaseTime {
        /// 1-based phase number
        phase: usize,
        /// Rejected end-time in seconds
        time: f64,
    },
    /// A phase end-time is NaN or infinite
    NonFinitePhaseTime {
        /// 1-based phase number
        phase: usize,
    },
    /// Phase end-times are not non-decreasing
    UnorderedPhases {
        /// 1-based phase number whose end-time precedes the previous one
        phase: usize,
        /// End-time of the previous phase
        previous: f64,
        /// Rejected end-time
        time: f64,
    },
    /// Time step is negative or not finite
    InvalidTimeStep(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Path(e) => write!(f, "Path error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::PathNotFound(name) => write!(f, "Path '{}' not found", name),
            ConfigError::InvalidSampleTime(v) => {
                write!(f, "Invalid sample time: {}. Must be > 0 and finite", v)
            }
            ConfigError::InvalidPath { name, source } => {
                write!(f, "Invalid path '{}': {}", name, source)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NegativePhaseTime { phase, time } => {
                write!(f, "Phase {} end time {} is smaller than zero", phase, time)
            }
            PathError::NonFinitePhaseTime { phase } => {
                write!(f, "Phase {} end time is not finite", phase)
            }
            PathError::UnorderedPhases {
                phase,
                previous,
                time,
            } => write!(
                f,
                "Phase {} end time {} precedes previous end time {}",
                phase, time, previous
            ),
            PathError::InvalidTimeStep(dt) => {
                write!(f, "Invalid time step: {}. Must be >= 0 and finite", dt)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PathError> for Error {
    fn from(e: PathError) -> Self {
        Error::Path(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}
