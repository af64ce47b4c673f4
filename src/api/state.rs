//! Application state for the shift clock API.

use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::config::ConfigLoader;

/// State shared by every handler.
///
/// Only the clock configuration lives here, behind an `Arc` so the router
/// can clone it per request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded clock configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The display timezone every handler calculates in.
    pub fn timezone(&self) -> Tz {
        self.config.timezone()
    }

    /// Today's date in the display timezone.
    pub fn today(&self) -> NaiveDate {
        self.config.config().today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClockConfig, DEFAULT_DISPLAY_TIMEZONE};

    #[test]
    fn test_clones_share_the_display_timezone() {
        let state = AppState::new(ConfigLoader::from_config(ClockConfig::new(
            chrono_tz::Europe::London,
        )));
        let handle = state.clone();
        assert_eq!(handle.timezone(), chrono_tz::Europe::London);
        assert!(Arc::ptr_eq(&state.config, &handle.config));
    }

    #[test]
    fn test_default_state_uses_pacific_time() {
        let state = AppState::new(ConfigLoader::default());
        assert_eq!(state.timezone(), DEFAULT_DISPLAY_TIMEZONE);
    }
}
