//! Clock status determination.

use rust_decimal::Decimal;

use crate::models::{ClockStatus, TimeEntry, TimeEntryStatus};

use super::overtime::exceeds_overtime_threshold;

/// Determines an employee's clock status from their entries and hours.
///
/// - Any open entry: [`ClockStatus::Overtime`] past 8 hours, else
///   [`ClockStatus::InProgress`].
/// - Otherwise any clocked-out entry: [`ClockStatus::Overtime`] past 8
///   hours, else [`ClockStatus::Completed`].
/// - Otherwise [`ClockStatus::NotStarted`].
///
/// Overtime is judged on whatever `worked_hours` the caller passes, so a
/// live total and a snapshot total can disagree.
///
/// # Examples
///
/// ```
/// use shift_clock::calculation::determine_clock_status;
/// use shift_clock::models::ClockStatus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(determine_clock_status(&[], Decimal::ZERO), ClockStatus::NotStarted);
/// ```
pub fn determine_clock_status(entries: &[TimeEntry], worked_hours: Decimal) -> ClockStatus {
    let has_status = |status: TimeEntryStatus| entries.iter().any(|e| e.status == status);

    if has_status(TimeEntryStatus::ClockedIn) {
        if exceeds_overtime_threshold(worked_hours) {
            ClockStatus::Overtime
        } else {
            ClockStatus::InProgress
        }
    } else if has_status(TimeEntryStatus::ClockedOut) {
        if exceeds_overtime_threshold(worked_hours) {
            ClockStatus::Overtime
        } else {
            ClockStatus::Completed
        }
    } else {
        ClockStatus::NotStarted
    }
}
