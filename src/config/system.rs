//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};
use crate::path::{Path, PathExecutor};

use super::path::PathConfig;

/// Maximum number of named paths in a configuration.
pub const MAX_PATHS: usize = 16;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Control-loop sample time in seconds.
    #[serde(default = "default_sample_time", rename = "sample_time_s")]
    pub sample_time: f64,

    /// Named path definitions.
    #[serde(default)]
    pub paths: FnvIndexMap<String<32>, PathConfig, MAX_PATHS>,
}

fn default_sample_time() -> f64 {
    0.001
}

impl SystemConfig {
    /// Get a path definition by name.
    pub fn path(&self, name: &str) -> Option<&PathConfig> {
        self.paths
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all path names.
    pub fn path_names(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(|s| s.as_str())
    }

    /// Build the named path.
    ///
    /// # Errors
    ///
    /// Returns an error if no path has that name or its definition is invalid.
    pub fn build_path(&self, name: &str) -> Result<Path> {
        self.path(name)
            .ok_or_else(|| {
                Error::Config(ConfigError::PathNotFound(
                    String::try_from(name).unwrap_or_default(),
                ))
            })?
            .build()
    }

    /// Build an executor running the named path at the configured sample time.
    ///
    /// # Errors
    ///
    /// Same as [`SystemConfig::build_path`], plus an invalid sample time.
    pub fn executor(&self, name: &str) -> Result<PathExecutor> {
        PathExecutor::new(self.build_path(name)?, self.sample_time)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            sample_time: default_sample_time(),
            paths: FnvIndexMap::new(),
        }
    }
}
