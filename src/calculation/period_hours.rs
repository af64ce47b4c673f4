//! Pay-period hour totals.

use std::collections::BTreeMap;

use chrono_tz::Tz;

use crate::error::EngineResult;
use crate::models::{PayPeriod, PeriodHours, TimeEntry, TimeEntryStatus};

use super::worked_hours::calculate_worked_hours;

/// Totals worked hours per employee for entries clocked in during `period`.
///
/// Only clocked-out entries count, as in [`calculate_worked_hours`]. Rows are
/// ordered by employee id; employees with no entries in the period are
/// omitted.
pub fn calculate_period_hours(
    entries: &[TimeEntry],
    period: &PayPeriod,
    tz: Tz,
) -> EngineResult<Vec<PeriodHours>> {
    let mut by_employee: BTreeMap<&str, Vec<TimeEntry>> = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|e| period.contains_date(e.local_clock_in_date(tz)))
    {
        by_employee
            .entry(entry.employee_id.as_str())
            .or_default()
            .push(entry.clone());
    }

    by_employee
        .into_iter()
        .map(|(employee_id, employee_entries)| {
            let worked_hours = calculate_worked_hours(&employee_entries)?;
            let entry_count = employee_entries
                .iter()
                .filter(|e| e.status == TimeEntryStatus::ClockedOut)
                .count() as u32;
            Ok(PeriodHours {
                employee_id: employee_id.to_string(),
                worked_hours,
                entry_count,
            })
        })
        .collect()
}
