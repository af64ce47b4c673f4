//! HTTP request handlers for the shift clock API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    build_clock_summaries, build_month_grid, build_week, calculate_period_hours, classify_shift,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{Capability, PayPeriod, Schedule, Session, TimeEntry};

use super::request::{
    ClassifyRequest, MonthGridRequest, PeriodHoursRequest, SummaryRequest, WeekRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ClassifyResponse, PeriodHoursResponse, ScheduleClassification,
    SummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/summaries", post(summaries_handler))
        .route("/calendar/month", post(month_grid_handler))
        .route("/calendar/week", post(week_handler))
        .route("/payroll/period-hours", post(period_hours_handler))
        .with_state(state)
}

/// Handler for POST /classify.
///
/// Tags each schedule as night, overtime or regular and reports its hours.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classify request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let result = classify_schedules(&request.schedules, state.timezone())
        .map(|classifications| ClassifyResponse { classifications });
    if result.is_ok() {
        info!(
            correlation_id = %correlation_id,
            schedules_count = request.schedules.len(),
            duration_us = start_time.elapsed().as_micros(),
            "Classification completed successfully"
        );
    }
    respond(result, correlation_id)
}

/// Handler for POST /summaries.
///
/// Viewers without the team-dashboard capability only get their own row.
async fn summaries_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summaries request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut session = Session::default();
    session.login(request.viewer.clone());

    let start_time = Instant::now();
    let result = visible_roster(&session, &request.employee_ids)
        .and_then(|roster| {
            build_clock_summaries(
                &roster,
                &request.schedules,
                &request.time_entries,
                request.date,
                state.timezone(),
            )
        })
        .map(|summaries| SummaryResponse {
            date: request.date,
            summaries,
        });
    if let Ok(response) = &result {
        info!(
            correlation_id = %correlation_id,
            viewer = %request.viewer.employee_id,
            role = %request.viewer.role,
            date = %request.date,
            rows = response.summaries.len(),
            duration_us = start_time.elapsed().as_micros(),
            "Summaries completed successfully"
        );
    }
    respond(result, correlation_id)
}

/// Handler for POST /calendar/month.
async fn month_grid_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthGridRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month grid request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = request.today.unwrap_or_else(|| state.today());
    let result = build_month_grid(
        request.year,
        request.month,
        &request.schedules,
        today,
        state.timezone(),
    );
    respond(result, correlation_id)
}

/// Handler for POST /calendar/week.
async fn week_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeekRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing week request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = request.today.unwrap_or_else(|| state.today());
    let result = build_week(request.date, &request.schedules, today, state.timezone());
    respond(result, correlation_id)
}

/// Handler for POST /payroll/period-hours.
///
/// Requires the payroll capability.
async fn period_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period hours request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut session = Session::default();
    session.login(request.viewer);
    let result = period_hours(&session, &request.time_entries, request.date, state.timezone());
    respond(result, correlation_id)
}

/// Classifies every schedule, failing on the first malformed one.
fn classify_schedules(schedules: &[Schedule], tz: Tz) -> EngineResult<Vec<ScheduleClassification>> {
    schedules
        .iter()
        .map(|schedule| {
            Ok(ScheduleClassification {
                schedule_id: schedule.id.clone(),
                classification: classify_shift(schedule, tz)?,
                hours: schedule.scheduled_hours()?,
            })
        })
        .collect()
}

/// The employees a viewer may see on the dashboard.
///
/// An empty roster for a team viewer means everyone in the records.
fn visible_roster(session: &Session, requested: &[String]) -> EngineResult<Vec<String>> {
    if session.can(Capability::ViewTeamDashboard) {
        return Ok(requested.to_vec());
    }
    session
        .viewer()
        .map(|viewer| vec![viewer.employee_id.clone()])
        .ok_or_else(|| EngineError::PermissionDenied {
            role: "anonymous".to_string(),
            action: "view the dashboard".to_string(),
        })
}

fn period_hours(
    session: &Session,
    entries: &[TimeEntry],
    date: NaiveDate,
    tz: Tz,
) -> EngineResult<PeriodHoursResponse> {
    session.require(Capability::ViewPayroll, "view pay-period totals")?;
    let period = PayPeriod::semi_monthly_containing(date);
    let totals = calculate_period_hours(entries, &period, tz)?;
    Ok(PeriodHoursResponse { period, totals })
}

/// Turns a calculation result into a JSON response.
fn respond<T: Serialize>(result: EngineResult<T>, correlation_id: Uuid) -> Response {
    match result {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => error_response(err, correlation_id),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
