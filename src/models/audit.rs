//! Audit trail models.
//!
//! Every successful result disclosure is recorded: who viewed (or
//! "anonymous" on the public PIN path), what was viewed, and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::requester::RequesterContext;
use super::term::Term;

/// The audited action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// A term result was disclosed to a requester.
    ResultView,
    /// A term result was written by a teacher submission.
    ResultSubmit,
}

/// A single audit trail entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique identifier for this entry.
    pub id: Uuid,
    /// The actor behind the action, or `"anonymous"`.
    pub actor: String,
    /// What happened.
    pub action: AuditAction,
    /// The student the action targeted.
    pub student_id: String,
    /// The term the action targeted.
    pub term: Term,
    /// The academic year the action targeted.
    pub year: i32,
    /// When the action happened.
    pub at: DateTime<Utc>,
}

impl AuditRecord {
    /// Records a result disclosure.
    pub fn result_view(
        requester: &RequesterContext,
        student_id: impl Into<String>,
        term: Term,
        year: i32,
    ) -> Self {
        Self::record(AuditAction::ResultView, requester, student_id, term, year)
    }

    /// Records a result submission.
    pub fn result_submit(
        requester: &RequesterContext,
        student_id: impl Into<String>,
        term: Term,
        year: i32,
    ) -> Self {
        Self::record(AuditAction::ResultSubmit, requester, student_id, term, year)
    }

    fn record(
        action: AuditAction,
        requester: &RequesterContext,
        student_id: impl Into<String>,
        term: Term,
        year: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor: requester.audit_actor(),
            action,
            student_id: student_id.into(),
            term,
            year,
            at: Utc::now(),
        }
    }
}
