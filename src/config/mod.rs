//! Configuration loading and management for the shift clock engine.
//!
//! The only setting is the display timezone. It is applied uniformly to
//! every wall-clock calculation: the night window, calendar dates and the
//! dashboard day.
//!
//! # Example
//!
//! ```no_run
//! use shift_clock::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Display timezone: {}", config.timezone());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ClockConfig, ClockFile, DEFAULT_DISPLAY_TIMEZONE};
