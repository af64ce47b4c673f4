//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the clock
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{ClockConfig, ClockFile};

/// Loads and provides access to the clock configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── clock.yaml   # display_timezone: America/Los_Angeles
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_clock::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Display timezone: {}", loader.timezone());
/// # Ok::<(), shift_clock::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ClockConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `clock.yaml` is missing, is not valid YAML, or
    /// names a timezone that is not in the IANA database.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let clock_path = path.as_ref().join("clock.yaml");
        let file = Self::load_yaml::<ClockFile>(&clock_path)?;
        let timezone = parse_timezone(&file.display_timezone)?;

        info!(
            path = %clock_path.display(),
            timezone = %timezone,
            "Loaded clock configuration"
        );

        Ok(Self {
            config: ClockConfig::new(timezone),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ClockConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying clock configuration.
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Returns the display timezone.
    pub fn timezone(&self) -> Tz {
        self.config.timezone()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(ClockConfig::default())
    }
}

fn parse_timezone(name: &str) -> EngineResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| EngineError::UnknownTimezone {
            name: name.to_string(),
        })
}
