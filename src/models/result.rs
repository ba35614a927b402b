//! Term result models.
//!
//! This module contains the stored [`TermResult`] record, its per-subject
//! [`SubjectScore`] entries, and the grade-annotated [`ResultView`]
//! returned by the access gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::term::Term;

/// One subject's recorded scores within a term result.
///
/// The stored `total` is always the sum of the three assessment
/// components: `ca1` and `ca2` are each out of 20, `exam` is out of 60,
/// so the total lies in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectScore {
    /// The subject name (e.g., "Mathematics").
    pub subject: String,
    /// First continuous assessment, out of 20.
    pub ca1: u32,
    /// Second continuous assessment, out of 20.
    pub ca2: u32,
    /// Examination score, out of 60.
    pub exam: u32,
    /// The total score, `ca1 + ca2 + exam`.
    pub total: u32,
}

/// A student's complete result record for one term.
///
/// One record holds all subject scores for that term. Submission replaces
/// the whole record (replace, not merge); `updated_by`/`updated_at` are
/// refreshed on every write and `version` increments, allowing stale
/// submissions to be detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermResult {
    /// The term this result is for.
    pub term: Term,
    /// The academic year this result is for.
    pub year: i32,
    /// All subject scores for the term.
    pub scores: Vec<SubjectScore>,
    /// The teacher's overall comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The identity that last wrote this record.
    pub updated_by: String,
    /// When this record was last written.
    pub updated_at: DateTime<Utc>,
    /// Write-version stamp, starting at 1 and incrementing on every
    /// overwrite.
    #[serde(default = "initial_version")]
    pub version: u64,
}

fn initial_version() -> u64 {
    1
}

impl TermResult {
    /// Checks whether this record is for the given term and year.
    pub fn is_for(&self, term: Term, year: i32) -> bool {
        self.term == term && self.year == year
    }
}

/// A subject score annotated with its resolved grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedScore {
    /// The subject name.
    pub subject: String,
    /// The total score out of 100.
    pub score: u32,
    /// The letter grade resolved from the grading scale.
    pub grade: String,
    /// The remark attached to the grade band.
    pub remark: String,
    /// Whether the grade is outside the configured failing set.
    pub passing: bool,
}

/// The grade-annotated result returned by a successful access-gate check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    /// The student the result belongs to.
    pub student_id: String,
    /// The student's full name.
    pub student_name: String,
    /// The term the result is for.
    pub term: Term,
    /// The academic year the result is for.
    pub year: i32,
    /// The grade-annotated subject scores.
    pub scores: Vec<GradedScore>,
    /// The teacher's overall comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// When the underlying record was last written.
    pub updated_at: DateTime<Utc>,
    /// The version stamp of the underlying record.
    pub version: u64,
}
