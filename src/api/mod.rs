//! HTTP API module for the shift clock engine.
//!
//! This module exposes the calculations as JSON endpoints for the
//! dashboard's presentation code.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ClassifyRequest, MonthGridRequest, PeriodHoursRequest, SummaryRequest, WeekRequest,
};
pub use response::{
    ApiError, ClassifyResponse, PeriodHoursResponse, ScheduleClassification, SummaryResponse,
};
pub use state::AppState;
