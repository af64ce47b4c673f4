//! Overtime detection.
//!
//! Overtime is a fixed 8-hour threshold applied either to a shift's
//! duration or to an hours total. There is no per-employee configuration.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

/// Hours beyond which a shift or a worked total counts as overtime.
pub const OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Returns true if the interval lasts longer than the overtime threshold.
///
/// The check is duration-based and ignores breaks. A reversed interval is
/// never overtime.
///
/// # Examples
///
/// ```
/// use shift_clock::calculation::is_overtime;
/// use chrono::{TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2025, 8, 21, 16, 0, 0).unwrap();
/// let eight = Utc.with_ymd_and_hms(2025, 8, 22, 0, 0, 0).unwrap();
/// let nine = Utc.with_ymd_and_hms(2025, 8, 22, 1, 0, 0).unwrap();
///
/// assert!(!is_overtime(start, eight));
/// assert!(is_overtime(start, nine));
/// ```
pub fn is_overtime(start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    end - start > threshold_duration()
}

/// Returns true if an hours total is past the overtime threshold.
pub fn exceeds_overtime_threshold(hours: Decimal) -> bool {
    hours > OVERTIME_THRESHOLD_HOURS
}

fn threshold_duration() -> Duration {
    Duration::hours(8)
}
