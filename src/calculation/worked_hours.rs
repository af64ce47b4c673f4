//! Worked-hours aggregation.
//!
//! Intervals are summed as exact [`Duration`]s and converted to hours once,
//! so a total of exactly eight hours stays exactly `8`.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{TimeEntry, TimeEntryStatus};

const SECONDS_PER_HOUR: i64 = 3600;

/// Converts a duration to hours, keeping sub-second precision.
///
/// # Examples
///
/// ```
/// use shift_clock::calculation::duration_to_hours;
/// use chrono::Duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(duration_to_hours(Duration::minutes(480)), Decimal::new(8, 0));
/// assert!(duration_to_hours(Duration::minutes(480) + Duration::seconds(1)) > Decimal::new(8, 0));
/// ```
pub fn duration_to_hours(duration: Duration) -> Decimal {
    let nanos = duration
        .num_nanoseconds()
        .map(i128::from)
        .unwrap_or_else(|| i128::from(duration.num_milliseconds()) * 1_000_000);
    (Decimal::from_i128_with_scale(nanos, 9) / Decimal::from(SECONDS_PER_HOUR)).normalize()
}

/// Calculates the length of an interval in hours.
///
/// Breaks are not subtracted. An interval whose end precedes its start is
/// rejected instead of producing negative hours.
///
/// # Examples
///
/// ```
/// use shift_clock::calculation::calculate_schedule_hours;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let start = Utc.with_ymd_and_hms(2025, 8, 21, 16, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2025, 8, 21, 23, 45, 0).unwrap();
/// assert_eq!(calculate_schedule_hours(start, end).unwrap(), Decimal::new(775, 2)); // 7.75
///
/// assert!(calculate_schedule_hours(end, start).is_err());
/// ```
pub fn calculate_schedule_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> EngineResult<Decimal> {
    if end < start {
        return Err(EngineError::InvalidInterval { start, end });
    }
    Ok(duration_to_hours(end - start))
}

/// Sums the total hours of clocked-out entries.
///
/// Entries still clocked in contribute nothing, and neither do adjusted
/// entries. A clocked-out entry with no end, or with an end before its
/// start, is rejected.
///
/// # Examples
///
/// ```
/// use shift_clock::calculation::calculate_worked_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_worked_hours(&[]).unwrap(), Decimal::ZERO);
/// ```
pub fn calculate_worked_hours(entries: &[TimeEntry]) -> EngineResult<Decimal> {
    closed_duration(entries).map(duration_to_hours)
}

/// Worked hours plus time accrued so far on open entries.
///
/// This is the live-dashboard view; [`calculate_worked_hours`] remains the
/// snapshot of completed punches only.
pub fn calculate_live_hours(entries: &[TimeEntry], now: DateTime<Utc>) -> EngineResult<Decimal> {
    let mut total = closed_duration(entries)?;
    for entry in entries.iter().filter(|e| e.is_open()) {
        total += entry.elapsed(now);
    }
    Ok(duration_to_hours(total))
}

fn closed_duration(entries: &[TimeEntry]) -> EngineResult<Duration> {
    let mut total = Duration::zero();
    for entry in entries
        .iter()
        .filter(|e| e.status == TimeEntryStatus::ClockedOut)
    {
        total += closed_entry_duration(entry)?;
    }
    Ok(total)
}

fn closed_entry_duration(entry: &TimeEntry) -> EngineResult<Duration> {
    match entry.worked_duration() {
        Ok(Some(duration)) => Ok(duration),
        Ok(None) => {
            warn!(entry_id = %entry.id, "Clocked-out entry has no clock-out time");
            Err(EngineError::InvalidTimeEntry {
                entry_id: entry.id.clone(),
                message: "status is CLOCKED_OUT but no clock-out time is recorded".to_string(),
            })
        }
        Err(err) => {
            warn!(entry_id = %entry.id, error = %err, "Rejected time entry");
            Err(err)
        }
    }
}
