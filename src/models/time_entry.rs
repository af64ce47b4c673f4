//! Time entry (punch) model.
//!
//! A [`TimeEntry`] records what actually happened at the clock: a clock-in,
//! an optional clock-out, and optional manager adjustments to either end.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::duration_to_hours;
use crate::error::{EngineError, EngineResult};

/// The state of a time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeEntryStatus {
    /// The employee is on the clock.
    ClockedIn,
    /// The employee has clocked out.
    ClockedOut,
    /// A manager corrected the punch times.
    Adjusted,
}

/// A clock-in/clock-out record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The employee who punched.
    pub employee_id: String,
    /// The schedule this punch was made against, if any.
    #[serde(default)]
    pub schedule_id: Option<String>,
    /// The clock-in instant.
    pub clock_in: DateTime<Utc>,
    /// The clock-out instant, absent while the employee is on the clock.
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    /// Manager-corrected start, overrides `clock_in` when present.
    #[serde(default)]
    pub adjusted_start: Option<DateTime<Utc>>,
    /// Manager-corrected end, overrides `clock_out` when present.
    #[serde(default)]
    pub adjusted_end: Option<DateTime<Utc>>,
    /// The entry status.
    pub status: TimeEntryStatus,
}

impl TimeEntry {
    /// The start of the worked interval: the adjusted start if any, else clock-in.
    pub fn effective_start(&self) -> DateTime<Utc> {
        self.adjusted_start.unwrap_or(self.clock_in)
    }

    /// The end of the worked interval: the adjusted end if any, else clock-out.
    pub fn effective_end(&self) -> Option<DateTime<Utc>> {
        self.adjusted_end.or(self.clock_out)
    }

    /// Returns true while the employee is still on the clock.
    pub fn is_open(&self) -> bool {
        self.status == TimeEntryStatus::ClockedIn
    }

    /// The worked interval as a duration.
    ///
    /// Defined only when an end (clock-out or adjusted end) is present;
    /// returns `Ok(None)` otherwise. An end before the start is rejected.
    pub fn worked_duration(&self) -> EngineResult<Option<Duration>> {
        let Some(end) = self.effective_end() else {
            return Ok(None);
        };
        let start = self.effective_start();
        if end < start {
            return Err(EngineError::InvalidTimeEntry {
                entry_id: self.id.clone(),
                message: format!("end {} precedes start {}", end, start),
            });
        }
        Ok(Some(end - start))
    }

    /// Total hours for the entry, see [`TimeEntry::worked_duration`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_clock::models::{TimeEntry, TimeEntryStatus};
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry {
    ///     id: "te_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     schedule_id: None,
    ///     clock_in: Utc.with_ymd_and_hms(2025, 8, 21, 16, 0, 0).unwrap(),
    ///     clock_out: Some(Utc.with_ymd_and_hms(2025, 8, 21, 20, 30, 0).unwrap()),
    ///     adjusted_start: None,
    ///     adjusted_end: None,
    ///     status: TimeEntryStatus::ClockedOut,
    /// };
    /// assert_eq!(entry.total_hours().unwrap(), Some(Decimal::new(45, 1))); // 4.5
    /// ```
    pub fn total_hours(&self) -> EngineResult<Option<Decimal>> {
        Ok(self.worked_duration()?.map(duration_to_hours))
    }

    /// Time on the clock up to `now` for an entry that has not ended yet.
    ///
    /// A clock-in stamped after `now` counts as zero.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        let start = self.effective_start();
        if now <= start {
            return Duration::zero();
        }
        now - start
    }

    /// Returns the calendar date of the clock-in in the display timezone.
    pub fn local_clock_in_date(&self, tz: Tz) -> NaiveDate {
        self.clock_in.with_timezone(&tz).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, d, h, m, 0).unwrap()
    }

    fn make_entry(status: TimeEntryStatus, clock_out: Option<DateTime<Utc>>) -> TimeEntry {
        TimeEntry {
            id: "te_001".to_string(),
            employee_id: "emp_001".to_string(),
            schedule_id: Some("sch_001".to_string()),
            clock_in: utc(21, 16, 0),
            clock_out,
            adjusted_start: None,
            adjusted_end: None,
            status,
        }
    }

    #[test]
    fn test_total_hours_undefined_while_clocked_in() {
        let entry = make_entry(TimeEntryStatus::ClockedIn, None);
        assert_eq!(entry.total_hours().unwrap(), None);
        assert!(entry.is_open());
    }

    #[test]
    fn test_total_hours_from_clock_out() {
        let entry = make_entry(TimeEntryStatus::ClockedOut, Some(utc(22, 0, 0)));
        assert_eq!(entry.total_hours().unwrap(), Some(Decimal::new(8, 0)));
    }

    #[test]
    fn test_adjustments_override_punches() {
        let mut entry = make_entry(TimeEntryStatus::Adjusted, Some(utc(22, 0, 0)));
        entry.adjusted_start = Some(utc(21, 17, 0));
        entry.adjusted_end = Some(utc(21, 21, 15));

        assert_eq!(entry.effective_start(), utc(21, 17, 0));
        assert_eq!(entry.total_hours().unwrap(), Some(Decimal::new(425, 2))); // 4.25
    }

    #[test]
    fn test_adjusted_end_without_clock_out_defines_total() {
        let mut entry = make_entry(TimeEntryStatus::Adjusted, None);
        entry.adjusted_end = Some(utc(21, 18, 0));
        assert_eq!(entry.total_hours().unwrap(), Some(Decimal::new(2, 0)));
    }

    #[test]
    fn test_clock_out_before_clock_in_is_rejected() {
        let entry = make_entry(TimeEntryStatus::ClockedOut, Some(utc(21, 15, 0)));
        match entry.total_hours() {
            Err(EngineError::InvalidTimeEntry { entry_id, .. }) => assert_eq!(entry_id, "te_001"),
            other => panic!("Expected InvalidTimeEntry error, got {:?}", other),
        }
    }

    #[test]
    fn test_elapsed_time() {
        let entry = make_entry(TimeEntryStatus::ClockedIn, None);
        assert_eq!(entry.elapsed(utc(21, 19, 30)), Duration::minutes(210));
        assert_eq!(entry.elapsed(utc(21, 15, 0)), Duration::zero());
    }

    #[test]
    fn test_worked_duration_keeps_seconds() {
        let mut entry = make_entry(TimeEntryStatus::ClockedOut, None);
        entry.clock_out = Some(utc(22, 0, 0) + Duration::seconds(59));
        assert_eq!(
            entry.worked_duration().unwrap(),
            Some(Duration::hours(8) + Duration::seconds(59))
        );
    }

    #[test]
    fn test_time_entry_deserialization() {
        let json = r#"{
            "id": "te_009",
            "employee_id": "emp_003",
            "clock_in": "2025-08-21T16:02:00Z",
            "status": "CLOCKED_IN"
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, TimeEntryStatus::ClockedIn);
        assert!(entry.schedule_id.is_none());
        assert!(entry.clock_out.is_none());
    }
}
