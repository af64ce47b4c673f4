//! Per-employee clock summary models.
//!
//! Summaries are derived on every read from schedules and time entries and
//! are never persisted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where an employee stands on the clock for a day.
///
/// # Example
///
/// ```
/// use shift_clock::models::ClockStatus;
///
/// let status = ClockStatus::InProgress;
/// assert_eq!(serde_json::to_string(&status).unwrap(), "\"IN_PROGRESS\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockStatus {
    /// No punches yet.
    NotStarted,
    /// Clocked in and under the overtime threshold.
    InProgress,
    /// Clocked out and under the overtime threshold.
    Completed,
    /// Worked hours exceed the overtime threshold.
    Overtime,
}

/// A dashboard row for one employee on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeClockSummary {
    /// The employee this row describes.
    pub employee_id: String,
    /// The dashboard day, in the display timezone.
    pub date: NaiveDate,
    /// Current clock status.
    pub status: ClockStatus,
    /// Hours from completed punches.
    pub worked_hours: Decimal,
    /// Hours planned by non-cancelled schedules.
    pub scheduled_hours: Decimal,
    /// The earliest clock-in of the day, if any.
    pub first_clock_in: Option<DateTime<Utc>>,
    /// The first clock-in came after the earliest scheduled start.
    pub is_late: bool,
    /// Worked hours exceed the overtime threshold.
    pub has_overtime: bool,
}

/// Worked-hours total for one employee across a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodHours {
    /// The employee.
    pub employee_id: String,
    /// Hours from completed punches inside the period.
    pub worked_hours: Decimal,
    /// Number of completed punches counted.
    pub entry_count: u32,
}
