//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{PathConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Sample time is positive and finite
/// - Every path has non-negative, finite, non-decreasing phase end-times
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    if !config.sample_time.is_finite() || config.sample_time <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidSampleTime(
            config.sample_time,
        )));
    }

    for (name, path) in config.paths.iter() {
        validate_path(name.as_str(), path)?;
    }

    Ok(())
}

fn validate_path(name: &str, path: &PathConfig) -> Result<()> {
    match path.build() {
        Ok(_) => Ok(()),
        Err(Error::Path(source)) => Err(Error::Config(ConfigError::InvalidPath {
            name: heapless::String::try_from(name).unwrap_or_default(),
            source,
        })),
        Err(e) => Err(e),
    }
}
