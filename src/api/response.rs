//! Response types for the Term Results Engine API.
//!
//! This module defines the error response structures, the HTTP status
//! mapping for engine errors, and the attendance summary body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing query/body field error response.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_details(
            "MISSING_FIELD",
            format!("missing field: {}", field),
            format!("Required field '{}' was not provided in the request", field),
        )
    }
}

/// Response body for `GET /student/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The student the summary is for.
    pub student_id: String,
    /// The first day of the summarized range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the summarized range (inclusive).
    pub end_date: NaiveDate,
    /// Effective instructional days in the range.
    pub school_days: u32,
    /// Plain calendar days in the range.
    pub calendar_days: u32,
    /// Days the student was marked present.
    pub days_present: u32,
    /// `days_present / school_days`, as a percentage. Zero when the
    /// range contains no school days.
    pub attendance_rate: f64,
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
            EngineError::StudentNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("STUDENT_NOT_FOUND", message),
            },
            EngineError::TermFeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("TERM_RECORD_NOT_FOUND", message),
            },
            EngineError::ResultNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("RESULTS_NOT_FOUND", message),
            },
            EngineError::InvalidPin => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("INVALID_PIN", message),
            },
            EngineError::FeesNotPaid { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("FEES_NOT_PAID", message),
            },
            EngineError::NotPublished { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("NOT_PUBLISHED", message),
            },
            EngineError::NotLinked { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("NOT_LINKED", message),
            },
            EngineError::RoleNotPermitted { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("ROLE_NOT_PERMITTED", message),
            },
            EngineError::InvalidScore { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_SCORE", message),
            },
            EngineError::TotalExceeded { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("TOTAL_EXCEEDED", message),
            },
            EngineError::EmptySubmission => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("EMPTY_SUBMISSION", message),
            },
            EngineError::InvalidRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_RANGE", message),
            },
            EngineError::StaleWrite { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("STALE_WRITE", message),
            },
            EngineError::UnresolvedGrade { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "UNRESOLVED_GRADE",
                    "Grading configuration error",
                    message,
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::Store { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Storage error", message),
            },
        }
    }
}
