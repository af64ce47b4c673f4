//! Calendar bucketing and grid generation.
//!
//! This module groups schedules by the date they start on in the display
//! timezone and lays those buckets out as Sunday-first month and week grids.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarDay, DAYS_PER_WEEK, MonthGrid, Schedule};

/// Groups schedules by their local start date.
///
/// Schedules sharing a date stay in encounter order inside their bucket.
///
/// # Example
///
/// ```
/// use shift_clock::calculation::group_by_date;
/// use shift_clock::models::{Schedule, ScheduleStatus};
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use chrono_tz::America::Los_Angeles;
///
/// // 23:00 Pacific on the 21st is 06:00 UTC on the 22nd
/// let schedule = Schedule {
///     id: "sch_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     start_time: Utc.with_ymd_and_hms(2025, 8, 22, 6, 0, 0).unwrap(),
///     end_time: Utc.with_ymd_and_hms(2025, 8, 22, 14, 0, 0).unwrap(),
///     break_minutes: 0,
///     position: "Security".to_string(),
///     status: ScheduleStatus::Scheduled,
/// };
///
/// let schedules = [schedule];
/// let buckets = group_by_date(&schedules, Los_Angeles);
/// assert!(buckets.contains_key(&NaiveDate::from_ymd_opt(2025, 8, 21).unwrap()));
/// ```
pub fn group_by_date(schedules: &[Schedule], tz: Tz) -> BTreeMap<NaiveDate, Vec<&Schedule>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Schedule>> = BTreeMap::new();
    for schedule in schedules {
        buckets
            .entry(schedule.local_start_date(tz))
            .or_default()
            .push(schedule);
    }
    buckets
}

/// Builds the month view for `year`/`month`.
///
/// The grid starts on the Sunday on or before the 1st and ends on the
/// Saturday on or after the last day, so its length is a multiple of seven.
/// Each cell carries the schedules starting that day and flags for
/// membership in the month and for `today`.
pub fn build_month_grid(
    year: i32,
    month: u32,
    schedules: &[Schedule],
    today: NaiveDate,
    tz: Tz,
) -> EngineResult<MonthGrid> {
    let invalid = || EngineError::InvalidMonth { year, month };

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(invalid)?;

    let lead_in = u64::from(first.weekday().num_days_from_sunday());
    let trailing = 6 - u64::from(last.weekday().num_days_from_sunday());
    let grid_start = first.checked_sub_days(Days::new(lead_in)).ok_or_else(invalid)?;
    let cell_count = lead_in + u64::from(last.day()) + trailing;

    let dates = consecutive_days(grid_start, cell_count).ok_or_else(invalid)?;

    let buckets = group_by_date(schedules, tz);
    let days = dates
        .into_iter()
        .map(|date| make_day(date, date.month() == month && date.year() == year, today, &buckets))
        .collect();

    Ok(MonthGrid { year, month, days })
}

/// Builds the Sunday-to-Saturday week containing `date`.
///
/// Every cell is marked as belonging to the current view.
pub fn build_week(
    date: NaiveDate,
    schedules: &[Schedule],
    today: NaiveDate,
    tz: Tz,
) -> EngineResult<Vec<CalendarDay>> {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let dates = date
        .checked_sub_days(Days::new(offset))
        .and_then(|sunday| consecutive_days(sunday, DAYS_PER_WEEK as u64))
        .ok_or(EngineError::InvalidWeek { date })?;

    let buckets = group_by_date(schedules, tz);
    Ok(dates
        .into_iter()
        .map(|day| make_day(day, true, today, &buckets))
        .collect())
}

/// `count` consecutive dates from `start`, or `None` past chrono's range.
fn consecutive_days(start: NaiveDate, count: u64) -> Option<Vec<NaiveDate>> {
    (0..count)
        .map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

fn make_day(
    date: NaiveDate,
    is_current_month: bool,
    today: NaiveDate,
    buckets: &BTreeMap<NaiveDate, Vec<&Schedule>>,
) -> CalendarDay {
    CalendarDay {
        date,
        is_current_month,
        is_today: date == today,
        schedules: buckets
            .get(&date)
            .map(|bucket| bucket.iter().map(|s| (*s).clone()).collect())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleStatus;
    use chrono::{DateTime, TimeZone, Utc, Weekday};
    use chrono_tz::America::Los_Angeles;

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pacific(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Los_Angeles
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn schedule(id: &str, start: DateTime<Utc>) -> Schedule {
        Schedule {
            id: id.to_string(),
            employee_id: "emp_001".to_string(),
            start_time: start,
            end_time: start + chrono::Duration::hours(8),
            break_minutes: 30,
            position: "Host".to_string(),
            status: ScheduleStatus::Scheduled,
        }
    }

    #[test]
    fn test_month_starting_wednesday_has_three_lead_in_days() {
        // 2025-10-01 is a Wednesday, 2025-10-31 a Friday
        let grid = build_month_grid(2025, 10, &[], make_date(2025, 10, 15), Los_Angeles).unwrap();
        assert_eq!(grid.lead_in_days(), 3);
        assert_eq!(grid.days[0].date, make_date(2025, 9, 28));
        assert_eq!(grid.trailing_days(), 1);
        assert_eq!(grid.days.len(), 35);
    }

    #[test]
    fn test_grid_is_whole_weeks_sunday_to_saturday() {
        for month in 1..=12 {
            let grid = build_month_grid(2025, month, &[], make_date(2025, 1, 1), Los_Angeles).unwrap();
            assert_eq!(grid.days.len() % DAYS_PER_WEEK, 0);
            for week in grid.weeks() {
                assert_eq!(week[0].date.weekday(), Weekday::Sun);
                assert_eq!(week[6].date.weekday(), Weekday::Sat);
            }
        }
    }

    #[test]
    fn test_month_starting_sunday_has_no_lead_in() {
        // 2026-02-01 is a Sunday and February 2026 ends on a Saturday
        let grid = build_month_grid(2026, 2, &[], make_date(2026, 2, 1), Los_Angeles).unwrap();
        assert_eq!(grid.lead_in_days(), 0);
        assert_eq!(grid.trailing_days(), 0);
        assert_eq!(grid.weeks().count(), 4);
    }

    #[test]
    fn test_december_grid_spills_into_next_year() {
        // 2025-12-31 is a Wednesday
        let grid = build_month_grid(2025, 12, &[], make_date(2025, 12, 25), Los_Angeles).unwrap();
        let last = grid.days.last().unwrap();
        assert_eq!(last.date, make_date(2026, 1, 3));
        assert!(!last.is_current_month);
    }

    #[test]
    fn test_today_flag_and_buckets() {
        let schedules = vec![
            schedule("s1", pacific(2025, 8, 21, 9)),
            schedule("s2", pacific(2025, 8, 21, 23)),
            schedule("s3", pacific(2025, 8, 22, 7)),
            schedule("s4", pacific(2025, 8, 21, 14)),
        ];
        let today = make_date(2025, 8, 21);
        let grid = build_month_grid(2025, 8, &schedules, today, Los_Angeles).unwrap();

        let cell = grid.day(today).unwrap();
        assert!(cell.is_today);
        assert!(cell.is_current_month);
        let ids: Vec<&str> = cell.schedules.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s4"]);

        let next = grid.day(make_date(2025, 8, 22)).unwrap();
        assert!(!next.is_today);
        assert_eq!(next.schedules.len(), 1);

        assert_eq!(grid.days.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_lead_in_cells_carry_schedules_from_previous_month() {
        // 2025-10 grid starts on 2025-09-28
        let schedules = vec![schedule("s1", pacific(2025, 9, 29, 9))];
        let grid = build_month_grid(2025, 10, &schedules, make_date(2025, 10, 1), Los_Angeles).unwrap();
        let cell = grid.day(make_date(2025, 9, 29)).unwrap();
        assert!(!cell.is_current_month);
        assert_eq!(cell.schedules.len(), 1);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        for month in [0, 13] {
            match build_month_grid(2025, month, &[], make_date(2025, 1, 1), Los_Angeles) {
                Err(EngineError::InvalidMonth { year, month: m }) => {
                    assert_eq!(year, 2025);
                    assert_eq!(m, month);
                }
                other => panic!("Expected InvalidMonth error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_group_by_date_keeps_encounter_order() {
        let schedules = vec![
            schedule("late", pacific(2025, 8, 21, 18)),
            schedule("early", pacific(2025, 8, 21, 6)),
        ];
        let buckets = group_by_date(&schedules, Los_Angeles);
        let bucket = &buckets[&make_date(2025, 8, 21)];
        assert_eq!(bucket[0].id, "late");
        assert_eq!(bucket[1].id, "early");
    }

    #[test]
    fn test_week_contains_date() {
        // 2025-08-21 is a Thursday
        let schedules = vec![schedule("s1", pacific(2025, 8, 18, 9))];
        let week = build_week(make_date(2025, 8, 21), &schedules, make_date(2025, 8, 21), Los_Angeles)
            .unwrap();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, make_date(2025, 8, 17));
        assert_eq!(week[6].date, make_date(2025, 8, 23));
        assert!(week[4].is_today);
        assert_eq!(week[1].schedules.len(), 1);
    }

    #[test]
    fn test_week_outside_date_range_is_rejected() {
        for offset in 0..DAYS_PER_WEEK as u64 {
            let date = NaiveDate::MIN.checked_add_days(Days::new(offset)).unwrap();
            let days_since_min = (date - NaiveDate::MIN).num_days();
            let out_of_range = i64::from(date.weekday().num_days_from_sunday()) > days_since_min;
            assert_week_result(date, out_of_range);
        }

        for offset in 0..DAYS_PER_WEEK as u64 {
            let date = NaiveDate::MAX.checked_sub_days(Days::new(offset)).unwrap();
            let days_to_max = (NaiveDate::MAX - date).num_days();
            let out_of_range = 6 - i64::from(date.weekday().num_days_from_sunday()) > days_to_max;
            assert_week_result(date, out_of_range);
        }
    }

    fn assert_week_result(date: NaiveDate, out_of_range: bool) {
        match build_week(date, &[], date, Los_Angeles) {
            Ok(week) => {
                assert!(!out_of_range, "Expected {} to be rejected", date);
                assert_eq!(week.len(), DAYS_PER_WEEK);
            }
            Err(EngineError::InvalidWeek { date: rejected }) => {
                assert!(out_of_range, "Expected a week for {}", date);
                assert_eq!(rejected, date);
            }
            Err(other) => panic!("Expected InvalidWeek error, got {:?}", other),
        }
    }
}
