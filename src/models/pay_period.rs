//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type used by payroll period
//! pickers. Periods are semi-monthly: the 1st through the 15th, and the 16th
//! through the last day of the month.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Last day of the first half of a month.
const FIRST_HALF_END_DAY: u32 = 15;

/// Represents a pay period with its inclusive date range.
///
/// # Example
///
/// ```
/// use shift_clock::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::semi_monthly_containing(NaiveDate::from_ymd_opt(2025, 8, 21).unwrap());
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 8, 16).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Returns the semi-monthly period that contains `date`.
    pub fn semi_monthly_containing(date: NaiveDate) -> Self {
        if date.day() <= FIRST_HALF_END_DAY {
            Self {
                start_date: date.with_day(1).unwrap_or(date),
                end_date: date.with_day(FIRST_HALF_END_DAY).unwrap_or(date),
            }
        } else {
            Self {
                start_date: date.with_day(FIRST_HALF_END_DAY + 1).unwrap_or(date),
                end_date: last_day_of_month(date),
            }
        }
    }

    /// Returns the period immediately after this one.
    pub fn next(&self) -> Self {
        let after = self
            .end_date
            .checked_add_days(Days::new(1))
            .unwrap_or(self.end_date);
        Self::semi_monthly_containing(after)
    }

    /// Returns the period immediately before this one.
    pub fn previous(&self) -> Self {
        let before = self
            .start_date
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.start_date);
        Self::semi_monthly_containing(before)
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}
