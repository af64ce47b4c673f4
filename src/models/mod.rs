//! Core data models for the shift clock engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod clock_summary;
mod pay_period;
mod role;
mod schedule;
mod session;
mod time_entry;

pub use calendar::{CalendarDay, DAYS_PER_WEEK, MonthGrid};
pub use clock_summary::{ClockStatus, EmployeeClockSummary, PeriodHours};
pub use pay_period::PayPeriod;
pub use role::{Capability, Role};
pub use schedule::{Schedule, ScheduleStatus};
pub use session::{Session, Viewer};
pub use time_entry::{TimeEntry, TimeEntryStatus};
