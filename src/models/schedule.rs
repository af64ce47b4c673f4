//! Schedule model and related types.
//!
//! This module defines the [`Schedule`] struct for planned work intervals
//! and the [`ScheduleStatus`] lifecycle values a scheduler assigns to them.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::duration_to_hours;
use crate::error::{EngineError, EngineResult};

/// The lifecycle status of a scheduled shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    /// Planned and not yet worked.
    Scheduled,
    /// Worked to completion.
    Completed,
    /// Withdrawn before it started.
    Cancelled,
    /// The employee never clocked in.
    NoShow,
}

/// A planned work interval for an employee.
///
/// Schedules are created by an external scheduler and are read-only to
/// this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique identifier for the schedule.
    pub id: String,
    /// The employee the shift is planned for.
    pub employee_id: String,
    /// The planned start instant.
    pub start_time: DateTime<Utc>,
    /// The planned end instant.
    pub end_time: DateTime<Utc>,
    /// Planned break length. Informational only, never subtracted from hours.
    #[serde(default)]
    pub break_minutes: u32,
    /// Position label shown on the roster (e.g. "Barista").
    #[serde(default)]
    pub position: String,
    /// Lifecycle status.
    pub status: ScheduleStatus,
}

impl Schedule {
    /// Rejects schedules whose end precedes their start.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_clock::models::{Schedule, ScheduleStatus};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let schedule = Schedule {
    ///     id: "sch_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start_time: Utc.with_ymd_and_hms(2025, 8, 21, 18, 0, 0).unwrap(),
    ///     end_time: Utc.with_ymd_and_hms(2025, 8, 21, 9, 0, 0).unwrap(),
    ///     break_minutes: 0,
    ///     position: "Barista".to_string(),
    ///     status: ScheduleStatus::Scheduled,
    /// };
    /// assert!(schedule.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_time < self.start_time {
            return Err(EngineError::InvalidSchedule {
                schedule_id: self.id.clone(),
                message: format!(
                    "end time {} precedes start time {}",
                    self.end_time, self.start_time
                ),
            });
        }
        Ok(())
    }

    /// Returns the planned length, breaks included.
    pub fn duration(&self) -> EngineResult<Duration> {
        self.validate()?;
        Ok(self.end_time - self.start_time)
    }

    /// Returns the planned duration in hours, breaks included.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_clock::models::{Schedule, ScheduleStatus};
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = Schedule {
    ///     id: "sch_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start_time: Utc.with_ymd_and_hms(2025, 8, 21, 16, 0, 0).unwrap(),
    ///     end_time: Utc.with_ymd_and_hms(2025, 8, 22, 1, 0, 0).unwrap(),
    ///     break_minutes: 30,
    ///     position: "Barista".to_string(),
    ///     status: ScheduleStatus::Scheduled,
    /// };
    /// assert_eq!(schedule.scheduled_hours().unwrap(), Decimal::new(9, 0));
    /// ```
    pub fn scheduled_hours(&self) -> EngineResult<Decimal> {
        self.duration().map(duration_to_hours)
    }

    /// Returns true if the shift was withdrawn and should not count toward
    /// planned hours.
    pub fn is_cancelled(&self) -> bool {
        self.status == ScheduleStatus::Cancelled
    }

    /// Returns the calendar date the shift starts on in the display timezone.
    pub fn local_start_date(&self, tz: Tz) -> NaiveDate {
        self.start_time.with_timezone(&tz).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::Los_Angeles;

    fn pacific(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Los_Angeles
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn make_schedule(start: DateTime<Utc>, end: DateTime<Utc>) -> Schedule {
        Schedule {
            id: "sch_001".to_string(),
            employee_id: "emp_001".to_string(),
            start_time: start,
            end_time: end,
            break_minutes: 30,
            position: "Server".to_string(),
            status: ScheduleStatus::Scheduled,
        }
    }

    #[test]
    fn test_scheduled_hours_ignores_breaks() {
        let schedule = make_schedule(pacific(2025, 8, 21, 9, 0), pacific(2025, 8, 21, 18, 0));
        assert_eq!(schedule.scheduled_hours().unwrap(), Decimal::new(9, 0));
    }

    #[test]
    fn test_overnight_schedule_hours() {
        let schedule = make_schedule(pacific(2025, 8, 21, 23, 0), pacific(2025, 8, 22, 7, 0));
        assert_eq!(schedule.scheduled_hours().unwrap(), Decimal::new(8, 0));
    }

    #[test]
    fn test_zero_length_schedule_is_valid() {
        let at = pacific(2025, 8, 21, 9, 0);
        let schedule = make_schedule(at, at);
        assert!(schedule.validate().is_ok());
        assert_eq!(schedule.scheduled_hours().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_reversed_schedule_is_rejected() {
        let schedule = make_schedule(pacific(2025, 8, 21, 18, 0), pacific(2025, 8, 21, 9, 0));
        match schedule.scheduled_hours() {
            Err(EngineError::InvalidSchedule { schedule_id, .. }) => {
                assert_eq!(schedule_id, "sch_001");
            }
            other => panic!("Expected InvalidSchedule error, got {:?}", other),
        }
    }

    #[test]
    fn test_local_start_date_uses_display_timezone() {
        // 23:00 Pacific on the 21st is already the 22nd in UTC
        let schedule = make_schedule(pacific(2025, 8, 21, 23, 0), pacific(2025, 8, 22, 7, 0));
        assert_eq!(schedule.start_time.date_naive(), NaiveDate::from_ymd_opt(2025, 8, 22).unwrap());
        assert_eq!(
            schedule.local_start_date(Los_Angeles),
            NaiveDate::from_ymd_opt(2025, 8, 21).unwrap()
        );
    }

    #[test]
    fn test_schedule_deserialization() {
        let json = r#"{
            "id": "sch_042",
            "employee_id": "emp_007",
            "start_time": "2025-08-21T16:00:00Z",
            "end_time": "2025-08-22T01:00:00Z",
            "break_minutes": 45,
            "position": "Line Cook",
            "status": "NO_SHOW"
        }"#;

        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.id, "sch_042");
        assert_eq!(schedule.break_minutes, 45);
        assert_eq!(schedule.status, ScheduleStatus::NoShow);
        assert!(!schedule.is_cancelled());
    }

    #[test]
    fn test_schedule_defaults_optional_fields() {
        let json = r#"{
            "id": "sch_043",
            "employee_id": "emp_007",
            "start_time": "2025-08-21T16:00:00Z",
            "end_time": "2025-08-21T20:00:00Z",
            "status": "CANCELLED"
        }"#;

        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.break_minutes, 0);
        assert!(schedule.position.is_empty());
        assert!(schedule.is_cancelled());
    }
}
