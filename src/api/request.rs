//! Request types for the Term Results Engine API.
//!
//! This module defines the JSON request structures and the header-based
//! requester extraction. Authentication itself is external: the auth
//! layer in front of this service resolves the session and forwards the
//! identity as `x-actor-id` / `x-actor-role` headers.

use axum::http::HeaderMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::access::ViewRequest;
use crate::models::{RequesterContext, Role, Term};
use crate::submission::{SubjectSubmission, SubmissionRequest};

/// Header carrying the authenticated actor id.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header carrying the authenticated actor role.
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Request body for `POST /student/results/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResultRequest {
    /// The student whose result is requested.
    pub student_id: String,
    /// The PIN gating disclosure for the term.
    pub pin_code: String,
    /// The requested term.
    pub term: Term,
    /// The requested academic year.
    pub year: i32,
}

impl From<VerifyResultRequest> for ViewRequest {
    fn from(req: VerifyResultRequest) -> Self {
        ViewRequest {
            student_id: req.student_id,
            term: req.term,
            year: req.year,
            supplied_pin: req.pin_code,
        }
    }
}

/// The three assessment components of one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentsRequest {
    /// First continuous assessment, out of 20.
    pub ca1: u32,
    /// Second continuous assessment, out of 20.
    pub ca2: u32,
    /// Examination score, out of 60.
    pub exam: u32,
}

/// One subject entry in a submission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectScoreRequest {
    /// The subject name.
    pub subject: String,
    /// The assessment components.
    pub assessments: AssessmentsRequest,
    /// Client-computed total. Accepted for wire compatibility and
    /// ignored: the stored total is always the component sum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u32>,
}

/// Request body for `PUT /teacher/students/:student_id/results`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResultRequest {
    /// The term the result is for.
    pub term: Term,
    /// The academic year the result is for.
    pub year: i32,
    /// The submitted subject scores.
    pub scores: Vec<SubjectScoreRequest>,
    /// The teacher's overall comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The result version the submitter read, for stale-write detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<u64>,
}

impl SubmitResultRequest {
    /// Converts the request into a workflow submission for a student.
    pub fn into_submission(self, student_id: impl Into<String>) -> SubmissionRequest {
        SubmissionRequest {
            student_id: student_id.into(),
            term: self.term,
            year: self.year,
            scores: self
                .scores
                .into_iter()
                .map(|entry| SubjectSubmission {
                    subject: entry.subject,
                    ca1: entry.assessments.ca1,
                    ca2: entry.assessments.ca2,
                    exam: entry.assessments.exam,
                })
                .collect(),
            comment: self.comment,
            expected_version: self.expected_version,
        }
    }
}

/// Query parameters for `GET /student/attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceQuery {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// The target student. Optional for student requesters, who default
    /// to their own record; required for every other role.
    #[serde(default)]
    pub student_id: Option<String>,
}

/// Builds the requester context from the forwarded identity headers.
///
/// Missing or unparseable headers yield an anonymous requester — the
/// engine never trusts a role without an actor id.
pub fn requester_from_headers(headers: &HeaderMap) -> RequesterContext {
    let actor_id = headers
        .get(ACTOR_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty());

    let role = headers
        .get(ACTOR_ROLE_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_role);

    match (actor_id, role) {
        (Some(id), Some(role)) => RequesterContext::authenticated(id, role),
        _ => RequesterContext::anonymous(),
    }
}

fn parse_role(value: &str) -> Option<Role> {
    match value {
        "student" => Some(Role::Student),
        "parent" => Some(Role::Parent),
        "teacher" => Some(Role::Teacher),
        "admin" => Some(Role::Admin),
        _ => None,
    }
}
