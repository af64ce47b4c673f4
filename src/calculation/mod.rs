//! Calculation logic for the shift clock engine.
//!
//! This module contains the pure functions behind the dashboard: shift
//! classification (night, overtime, regular), worked-hours aggregation over
//! time entries, clock status determination, daily per-employee summaries,
//! pay-period totals, and calendar bucketing into month and week grids.
//!
//! Every wall-clock question is answered in the display timezone passed in
//! by the caller.

mod calendar;
mod clock_status;
mod clock_summary;
mod overtime;
mod period_hours;
mod shift_classification;
mod worked_hours;

pub use calendar::{build_month_grid, build_week, group_by_date};
pub use clock_status::determine_clock_status;
pub use clock_summary::build_clock_summaries;
pub use overtime::{OVERTIME_THRESHOLD_HOURS, exceeds_overtime_threshold, is_overtime};
pub use period_hours::calculate_period_hours;
pub use shift_classification::{
    NIGHT_END_HOUR, NIGHT_START_HOUR, ShiftClassification, classify_shift, is_night_shift,
};
pub use worked_hours::{
    calculate_live_hours, calculate_schedule_hours, calculate_worked_hours, duration_to_hours,
};
