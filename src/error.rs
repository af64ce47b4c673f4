//! Error types for the shift clock engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine rejects instead of computing through.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// The main error type for the shift clock engine.
///
/// # Example
///
/// ```
/// use shift_clock::error::EngineError;
///
/// let error = EngineError::UnknownTimezone {
///     name: "Mars/Olympus".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown display timezone: Mars/Olympus");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured display timezone is not a known IANA name.
    #[error("Unknown display timezone: {name}")]
    UnknownTimezone {
        /// The timezone name as written in the configuration.
        name: String,
    },

    /// A schedule record was invalid or contained inconsistent data.
    #[error("Invalid schedule '{schedule_id}': {message}")]
    InvalidSchedule {
        /// The ID of the invalid schedule.
        schedule_id: String,
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// A time entry was invalid or contained inconsistent data.
    #[error("Invalid time entry '{entry_id}': {message}")]
    InvalidTimeEntry {
        /// The ID of the invalid time entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A bare interval ended before it started.
    #[error("Invalid interval: end {end} precedes start {start}")]
    InvalidInterval {
        /// The start of the interval.
        start: DateTime<Utc>,
        /// The end of the interval.
        end: DateTime<Utc>,
    },

    /// A calendar month outside 1..=12, or a year chrono cannot represent.
    #[error("Invalid calendar month: {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// The Sunday-to-Saturday week around a date falls outside chrono's range.
    #[error("Week containing {date} is outside the supported date range")]
    InvalidWeek {
        /// The requested date.
        date: NaiveDate,
    },

    /// The viewer's role does not grant the requested capability.
    #[error("Permission denied for role '{role}': {action}")]
    PermissionDenied {
        /// The viewer's role.
        role: String,
        /// The action that was refused.
        action: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
