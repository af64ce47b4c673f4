//! Configuration types for the shift clock engine.
//!
//! This module contains the raw structure deserialized from `clock.yaml` and
//! the validated [`ClockConfig`] the rest of the crate reads.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

/// The display timezone used when no configuration says otherwise.
pub const DEFAULT_DISPLAY_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Contents of `clock.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockFile {
    /// IANA name of the display timezone (e.g. "America/Los_Angeles").
    pub display_timezone: String,
}

/// Validated clock configuration.
///
/// # Example
///
/// ```
/// use shift_clock::config::ClockConfig;
///
/// let config = ClockConfig::default();
/// assert_eq!(config.timezone().name(), "America/Los_Angeles");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    timezone: Tz,
}

impl ClockConfig {
    /// Creates a configuration for the given display timezone.
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Returns the display timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns today's date in the display timezone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_TIMEZONE)
    }
}
