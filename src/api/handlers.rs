//! HTTP request handlers for the Term Results Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::access::{authorize_result_view, ensure_owned, ViewRequest};
use crate::calendar::{school_days, total_days};
use crate::error::EngineError;
use crate::models::{Role, Student};
use crate::submission::submit_result;

use super::request::{
    requester_from_headers, AttendanceQuery, SubmitResultRequest, VerifyResultRequest,
};
use super::response::{ApiError, ApiErrorResponse, AttendanceSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/student/results/verify", post(verify_handler))
        .route(
            "/teacher/students/:student_id/results",
            put(submit_handler),
        )
        .route("/student/attendance", get(attendance_handler))
        .with_state(state)
}

/// Handler for `POST /student/results/verify`.
///
/// Public endpoint: the PIN is the credential. Returns the
/// grade-annotated result or one of the distinguishable denial kinds.
async fn verify_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<VerifyResultRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        student_id = %request.student_id,
        "Processing result verification"
    );

    let requester = requester_from_headers(&headers);
    let view_request: ViewRequest = request.into();
    match authorize_result_view(state.store(), state.config(), &view_request, &requester) {
        Ok(view) => json_response(StatusCode::OK, Json(view)),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Result verification denied"
            );
            error_response(err)
        }
    }
}

/// Handler for `PUT /teacher/students/:student_id/results`.
///
/// Validates and records a teacher's score entry, replacing the stored
/// result for the term.
async fn submit_handler(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<SubmitResultRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        student_id = %student_id,
        subjects = request.scores.len(),
        "Processing result submission"
    );

    let requester = requester_from_headers(&headers);
    let submission = request.into_submission(student_id);
    match submit_result(state.store(), &submission, &requester) {
        Ok(result) => json_response(StatusCode::OK, Json(result)),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Result submission rejected"
            );
            error_response(err)
        }
    }
}

/// Handler for `GET /student/attendance`.
///
/// Role-gated: a student sees their own record, a parent a linked child,
/// staff any student. Computes the school-day attendance rate for the
/// requested range using the configured term holidays.
async fn attendance_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AttendanceQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let requester = requester_from_headers(&headers);

    let student = match resolve_attendance_target(&state, &requester, &query) {
        Ok(student) => student,
        Err(response) => {
            warn!(
                correlation_id = %correlation_id,
                error = %response.error.message,
                "Attendance request denied"
            );
            return response.into_response();
        }
    };

    let holidays = state
        .config()
        .holidays_overlapping(query.start_date, query.end_date);
    let summary = school_days(query.start_date, query.end_date, &holidays)
        .and_then(|school| {
            let calendar_days = total_days(query.start_date, query.end_date)?;
            let days_present = student.days_present(query.start_date, query.end_date);
            let attendance_rate = if school == 0 {
                0.0
            } else {
                f64::from(days_present) / f64::from(school) * 100.0
            };
            Ok(AttendanceSummary {
                student_id: student.student_id.clone(),
                start_date: query.start_date,
                end_date: query.end_date,
                school_days: school,
                calendar_days,
                days_present,
                attendance_rate,
            })
        });

    match summary {
        Ok(summary) => json_response(StatusCode::OK, Json(summary)),
        Err(err) => error_response(err),
    }
}

/// Resolves which student an attendance request targets, applying the
/// per-role ownership rules.
fn resolve_attendance_target(
    state: &AppState,
    requester: &crate::models::RequesterContext,
    query: &AttendanceQuery,
) -> Result<Student, ApiErrorResponse> {
    match requester.role {
        Role::Anonymous => Err(EngineError::RoleNotPermitted {
            message: "authentication required".to_string(),
        }
        .into()),
        Role::Student => {
            let actor = requester.actor_id.clone().unwrap_or_default();
            let student = state
                .store()
                .find_by_user(&actor)
                .map_err(ApiErrorResponse::from)?
                .ok_or_else(|| {
                    ApiErrorResponse::from(EngineError::NotLinked {
                        student_id: query.student_id.clone().unwrap_or_else(|| actor.clone()),
                    })
                })?;
            // A student may name their own id explicitly, nothing else.
            if let Some(requested) = &query.student_id {
                if *requested != student.student_id {
                    return Err(EngineError::NotLinked {
                        student_id: requested.clone(),
                    }
                    .into());
                }
            }
            Ok(student)
        }
        Role::Parent | Role::Teacher | Role::Admin => {
            let student_id = query.student_id.clone().ok_or(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::missing_field("student_id"),
            })?;
            let student = state
                .store()
                .get(&student_id)
                .map_err(ApiErrorResponse::from)?
                .ok_or_else(|| {
                    ApiErrorResponse::from(EngineError::StudentNotFound {
                        student_id: student_id.clone(),
                    })
                })?;
            if requester.role == Role::Parent {
                ensure_owned(&student, requester).map_err(ApiErrorResponse::from)?;
            }
            Ok(student)
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: Json<T>) -> axum::response::Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn error_response(err: EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Maps a JSON extraction rejection to a structured 400.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
