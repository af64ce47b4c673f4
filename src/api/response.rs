//! Response types for the shift clock API.
//!
//! This module defines the success bodies and the error response structure
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ShiftClassification;
use crate::error::EngineError;
use crate::models::{EmployeeClockSummary, PayPeriod, PeriodHours};

/// Classification of one schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleClassification {
    /// The classified schedule.
    pub schedule_id: String,
    /// Night, overtime or regular.
    pub classification: ShiftClassification,
    /// Planned hours, breaks included.
    pub hours: Decimal,
}

/// Response body for `POST /classify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// One entry per schedule, in request order.
    pub classifications: Vec<ScheduleClassification>,
}

/// Response body for `POST /summaries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The dashboard day.
    pub date: NaiveDate,
    /// The rows visible to the viewer.
    pub summaries: Vec<EmployeeClockSummary>,
}

/// Response body for `POST /payroll/period-hours`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodHoursResponse {
    /// The resolved pay period.
    pub period: PayPeriod,
    /// Per-employee totals ordered by employee id.
    pub totals: Vec<PeriodHours>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::UnknownTimezone { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidSchedule { schedule_id, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("schedule_id: {}", schedule_id),
                ),
            },
            EngineError::InvalidTimeEntry { entry_id, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("entry_id: {}", entry_id),
                ),
            },
            EngineError::InvalidInterval { .. }
            | EngineError::InvalidMonth { .. }
            | EngineError::InvalidWeek { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::validation_error(message),
                }
            }
            EngineError::PermissionDenied { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("PERMISSION_DENIED", message),
            },
        }
    }
}
