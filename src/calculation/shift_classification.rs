//! Shift classification.
//!
//! Tags a schedule as a night, overtime or regular shift. The night window
//! is read from the start time's hour of day in the display timezone; night
//! takes precedence over overtime when both hold.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineResult;
use crate::models::Schedule;

use super::overtime::is_overtime;

/// First hour of the night window (inclusive).
pub const NIGHT_START_HOUR: u32 = 22;

/// Hour the night window ends (exclusive).
pub const NIGHT_END_HOUR: u32 = 6;

/// The classification tag shown for a shift.
///
/// # Example
///
/// ```
/// use shift_clock::calculation::ShiftClassification;
///
/// assert_eq!(ShiftClassification::Night.to_string(), "night");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftClassification {
    /// Starts outside the night window and lasts at most 8 hours.
    Regular,
    /// Starts between 22:00 and 06:00.
    Night,
    /// Lasts longer than 8 hours and is not a night shift.
    Overtime,
}

impl std::fmt::Display for ShiftClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftClassification::Regular => write!(f, "regular"),
            ShiftClassification::Night => write!(f, "night"),
            ShiftClassification::Overtime => write!(f, "overtime"),
        }
    }
}

/// Returns true if `start` falls in the 22:00 to 06:00 window of `tz`.
///
/// # Examples
///
/// ```
/// use shift_clock::calculation::is_night_shift;
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::America::Los_Angeles;
///
/// let eleven_pm = Los_Angeles.with_ymd_and_hms(2025, 8, 21, 23, 0, 0).unwrap();
/// assert!(is_night_shift(eleven_pm.with_timezone(&Utc), Los_Angeles));
///
/// let nine_am = Los_Angeles.with_ymd_and_hms(2025, 8, 21, 9, 0, 0).unwrap();
/// assert!(!is_night_shift(nine_am.with_timezone(&Utc), Los_Angeles));
/// ```
pub fn is_night_shift(start: DateTime<Utc>, tz: Tz) -> bool {
    let hour = start.with_timezone(&tz).hour();
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

/// Classifies a schedule.
///
/// Returns [`ShiftClassification::Night`] if the shift starts in the night
/// window, else [`ShiftClassification::Overtime`] if it lasts longer than
/// 8 hours, else [`ShiftClassification::Regular`]. A schedule that ends
/// before it starts is rejected.
pub fn classify_shift(schedule: &Schedule, tz: Tz) -> EngineResult<ShiftClassification> {
    if let Err(err) = schedule.validate() {
        warn!(schedule_id = %schedule.id, error = %err, "Rejected schedule during classification");
        return Err(err);
    }

    let classification = if is_night_shift(schedule.start_time, tz) {
        ShiftClassification::Night
    } else if is_overtime(schedule.start_time, schedule.end_time) {
        ShiftClassification::Overtime
    } else {
        ShiftClassification::Regular
    };
    Ok(classification)
}
