//! Request types for the shift clock API.
//!
//! Records arrive as already-resolved schedules and time entries; this layer
//! never fetches them itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Schedule, TimeEntry, Viewer};

/// Request body for `POST /classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The schedules to tag.
    pub schedules: Vec<Schedule>,
}

/// Request body for `POST /summaries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Who is looking at the dashboard.
    pub viewer: Viewer,
    /// The dashboard day in the display timezone.
    pub date: NaiveDate,
    /// Roster order; empty means every employee seen in the records.
    #[serde(default)]
    pub employee_ids: Vec<String>,
    /// Schedules to summarise.
    #[serde(default)]
    pub schedules: Vec<Schedule>,
    /// Punches to summarise.
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

/// Request body for `POST /calendar/month`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGridRequest {
    /// The displayed year.
    pub year: i32,
    /// The displayed month, 1-based.
    pub month: u32,
    /// Overrides today's date for the `is_today` flag.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Schedules to place on the grid.
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

/// Request body for `POST /calendar/week`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekRequest {
    /// Any date inside the wanted week.
    pub date: NaiveDate,
    /// Overrides today's date for the `is_today` flag.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Schedules to place on the week.
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

/// Request body for `POST /payroll/period-hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodHoursRequest {
    /// Who is asking. Requires the payroll capability.
    pub viewer: Viewer,
    /// Any date inside the wanted semi-monthly pay period.
    pub date: NaiveDate,
    /// Punches to total.
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}
