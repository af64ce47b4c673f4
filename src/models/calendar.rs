//! Calendar grid models.
//!
//! Month and week views are laid out Sunday-first in rows of seven
//! [`CalendarDay`] cells.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Schedule;

/// Number of columns in every calendar grid.
pub const DAYS_PER_WEEK: usize = 7;

/// One cell of a calendar grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The date this cell shows.
    pub date: NaiveDate,
    /// The date belongs to the month being displayed.
    pub is_current_month: bool,
    /// The date is today in the display timezone.
    pub is_today: bool,
    /// Schedules starting on this date, in encounter order.
    pub schedules: Vec<Schedule>,
}

/// A month view padded to whole Sunday-to-Saturday weeks.
///
/// # Example
///
/// ```
/// use shift_clock::calculation::build_month_grid;
/// use chrono::NaiveDate;
/// use chrono_tz::America::Los_Angeles;
///
/// // October 2025 starts on a Wednesday
/// let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
/// let grid = build_month_grid(2025, 10, &[], today, Los_Angeles).unwrap();
/// assert_eq!(grid.lead_in_days(), 3);
/// assert_eq!(grid.weeks().count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// The displayed year.
    pub year: i32,
    /// The displayed month, 1-based.
    pub month: u32,
    /// Cells in row-major order; the length is a multiple of seven.
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Iterates over the grid one week row at a time.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    /// Number of cells before the 1st that belong to the previous month.
    pub fn lead_in_days(&self) -> usize {
        self.days
            .iter()
            .take_while(|day| !day.is_current_month)
            .count()
    }

    /// Number of cells after the last day that belong to the next month.
    pub fn trailing_days(&self) -> usize {
        self.days
            .iter()
            .rev()
            .take_while(|day| !day.is_current_month)
            .count()
    }

    /// Looks up the cell for a date, if the grid shows it.
    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.date == date)
    }
}
