//! Result submission workflow.
//!
//! Validates a teacher's score entry for a student and term, then
//! replaces the stored result record. Validation is fail-fast: nothing is
//! persisted unless every subject passes.

use chrono::Utc;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditRecord, RequesterContext, SubjectScore, Term, TermResult};
use crate::store::StudentStore;

/// Maximum value of each continuous assessment component.
pub const CA_MAX: u32 = 20;
/// Maximum value of the examination component.
pub const EXAM_MAX: u32 = 60;
/// Maximum total score per subject.
pub const TOTAL_MAX: u32 = 100;

/// One subject's submitted assessment components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSubmission {
    /// The subject name.
    pub subject: String,
    /// First continuous assessment, out of 20.
    pub ca1: u32,
    /// Second continuous assessment, out of 20.
    pub ca2: u32,
    /// Examination score, out of 60.
    pub exam: u32,
}

impl SubjectSubmission {
    /// The component sum that becomes the stored total.
    pub fn total(&self) -> u32 {
        self.ca1 + self.ca2 + self.exam
    }
}

/// A request to record a student's result for one term.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    /// The student whose result is being recorded.
    pub student_id: String,
    /// The term the result is for.
    pub term: Term,
    /// The academic year the result is for.
    pub year: i32,
    /// The submitted subject scores.
    pub scores: Vec<SubjectSubmission>,
    /// The teacher's overall comment.
    pub comment: Option<String>,
    /// The result version the submitter read, if they want stale-write
    /// detection. Absent means last-writer-wins.
    pub expected_version: Option<u64>,
}

/// Validates submitted scores without touching the store.
///
/// Checks each subject in order: component bounds first (`ca1`, `ca2`,
/// `exam`), then the component sum. After per-subject checks, rejects a
/// submission in which every component of every subject is zero — an
/// all-zero entry is treated as accidental.
///
/// # Errors
///
/// [`EngineError::InvalidScore`], [`EngineError::TotalExceeded`], or
/// [`EngineError::EmptySubmission`].
pub fn validate_scores(scores: &[SubjectSubmission]) -> EngineResult<()> {
    for entry in scores {
        check_component(entry, "ca1", entry.ca1, CA_MAX)?;
        check_component(entry, "ca2", entry.ca2, CA_MAX)?;
        check_component(entry, "exam", entry.exam, EXAM_MAX)?;

        if entry.total() > TOTAL_MAX {
            return Err(EngineError::TotalExceeded {
                subject: entry.subject.clone(),
                total: entry.total(),
            });
        }
    }

    let any_nonzero = scores.iter().any(|entry| entry.total() > 0);
    if !any_nonzero {
        return Err(EngineError::EmptySubmission);
    }

    Ok(())
}

fn check_component(
    entry: &SubjectSubmission,
    component: &'static str,
    value: u32,
    max: u32,
) -> EngineResult<()> {
    if value > max {
        return Err(EngineError::InvalidScore {
            subject: entry.subject.clone(),
            component,
            value,
            max,
        });
    }
    Ok(())
}

/// Validates and records a result submission.
///
/// On success the student's result record for `(term, year)` is replaced
/// wholesale — submitting a subset of subjects drops previously recorded
/// scores for the omitted ones. `updated_by`/`updated_at` are set from
/// the requester and the current time, and the version stamp increments.
///
/// When the request carries an `expected_version` that no longer matches
/// the stored record, the write is rejected with
/// [`EngineError::StaleWrite`] and nothing is persisted.
///
/// # Errors
///
/// - [`EngineError::RoleNotPermitted`] for non-staff requesters.
/// - [`EngineError::StudentNotFound`] when the student does not exist.
/// - Any validation error from [`validate_scores`].
/// - [`EngineError::StaleWrite`] on a version mismatch.
pub fn submit_result(
    store: &dyn StudentStore,
    request: &SubmissionRequest,
    requester: &RequesterContext,
) -> EngineResult<TermResult> {
    if !requester.is_staff() {
        return Err(EngineError::RoleNotPermitted {
            message: "only teachers may submit results".to_string(),
        });
    }

    let mut student =
        store
            .get(&request.student_id)?
            .ok_or_else(|| EngineError::StudentNotFound {
                student_id: request.student_id.clone(),
            })?;

    validate_scores(&request.scores)?;

    let existing_version = student
        .result(request.term, request.year)
        .map(|r| r.version);
    if let Some(expected) = request.expected_version {
        let actual = existing_version.unwrap_or(0);
        if expected != actual {
            return Err(EngineError::StaleWrite { expected, actual });
        }
    }

    let result = TermResult {
        term: request.term,
        year: request.year,
        scores: request
            .scores
            .iter()
            .map(|entry| SubjectScore {
                subject: entry.subject.clone(),
                ca1: entry.ca1,
                ca2: entry.ca2,
                exam: entry.exam,
                total: entry.total(),
            })
            .collect(),
        comment: request.comment.clone(),
        updated_by: requester.audit_actor(),
        updated_at: Utc::now(),
        version: existing_version.map_or(1, |v| v + 1),
    };

    student
        .results
        .retain(|r| !r.is_for(request.term, request.year));
    student.results.push(result.clone());
    store.put(student)?;

    store.record_audit(AuditRecord::result_submit(
        requester,
        &request.student_id,
        request.term,
        request.year,
    ))?;
    info!(
        student_id = %request.student_id,
        term = %request.term,
        year = request.year,
        subjects = request.scores.len(),
        version = result.version,
        "Result recorded"
    );

    Ok(result)
}
