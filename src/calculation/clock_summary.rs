//! Daily clock summaries for the team dashboard.
//!
//! Builds one [`EmployeeClockSummary`] per employee for a single day in the
//! display timezone, from that day's schedules and punches.

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{ClockStatus, EmployeeClockSummary, Schedule, TimeEntry};

use super::clock_status::determine_clock_status;
use super::worked_hours::{calculate_worked_hours, duration_to_hours};

/// Builds dashboard rows for `date`.
///
/// Rows follow `employee_ids`; when it is empty, every employee seen in
/// `schedules` and then `entries` gets a row, in first-seen order.
///
/// Per employee:
/// - scheduled hours sum the non-cancelled schedules starting on `date`;
/// - worked hours and status come from the punches clocked in on `date`;
/// - `is_late` is set when the first clock-in is after the earliest
///   non-cancelled scheduled start.
///
/// Any reversed schedule or punch for the day rejects the whole call.
pub fn build_clock_summaries(
    employee_ids: &[String],
    schedules: &[Schedule],
    entries: &[TimeEntry],
    date: NaiveDate,
    tz: Tz,
) -> EngineResult<Vec<EmployeeClockSummary>> {
    let roster = if employee_ids.is_empty() {
        employees_seen(schedules, entries)
    } else {
        employee_ids.to_vec()
    };

    let mut summaries = Vec::with_capacity(roster.len());
    for employee_id in roster {
        let day_schedules: Vec<&Schedule> = schedules
            .iter()
            .filter(|s| s.employee_id == employee_id && !s.is_cancelled())
            .filter(|s| s.local_start_date(tz) == date)
            .collect();
        let day_entries: Vec<TimeEntry> = entries
            .iter()
            .filter(|e| e.employee_id == employee_id && e.local_clock_in_date(tz) == date)
            .cloned()
            .collect();

        let mut scheduled = Duration::zero();
        for schedule in &day_schedules {
            scheduled += schedule.duration()?;
        }

        let worked_hours = calculate_worked_hours(&day_entries)?;
        let status = determine_clock_status(&day_entries, worked_hours);

        let first_clock_in = day_entries.iter().map(|e| e.clock_in).min();
        let earliest_start = day_schedules.iter().map(|s| s.start_time).min();
        let is_late = match (first_clock_in, earliest_start) {
            (Some(clock_in), Some(start)) => clock_in > start,
            _ => false,
        };

        debug!(
            employee_id = %employee_id,
            %date,
            schedules = day_schedules.len(),
            entries = day_entries.len(),
            ?status,
            "Built clock summary"
        );

        summaries.push(EmployeeClockSummary {
            employee_id,
            date,
            status,
            worked_hours,
            scheduled_hours: duration_to_hours(scheduled),
            first_clock_in,
            is_late,
            has_overtime: status == ClockStatus::Overtime,
        });
    }

    Ok(summaries)
}

fn employees_seen(schedules: &[Schedule], entries: &[TimeEntry]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let ids = schedules
        .iter()
        .map(|s| &s.employee_id)
        .chain(entries.iter().map(|e| &e.employee_id));
    for id in ids {
        if !seen.contains(id) {
            seen.push(id.clone());
        }
    }
    seen
}
