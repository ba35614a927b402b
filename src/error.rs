//! Error types for the Term Results Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while gating, grading, or
//! recording results.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Term;

/// The main error type for the Term Results Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. The denial
/// variants are deliberately kept distinct from each other: the client
/// presents different remediation for a wrong PIN, an unpaid fee, and an
/// unpublished result.
///
/// # Example
///
/// ```
/// use results_engine::error::EngineError;
///
/// let error = EngineError::StudentNotFound {
///     student_id: "STU-0042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Student not found: STU-0042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No student exists with the given identifier.
    #[error("Student not found: {student_id}")]
    StudentNotFound {
        /// The student identifier that was not found.
        student_id: String,
    },

    /// The student has no fee record for the requested term and year.
    #[error("No term record for {term} term {year}")]
    TermFeeNotFound {
        /// The requested term.
        term: Term,
        /// The requested academic year.
        year: i32,
    },

    /// The student has no result recorded for the requested term and year.
    #[error("No results for {term} term {year}")]
    ResultNotFound {
        /// The requested term.
        term: Term,
        /// The requested academic year.
        year: i32,
    },

    /// The supplied PIN did not match the term fee record.
    ///
    /// Carries no term or payment detail: a wrong PIN must not reveal
    /// anything about the state behind it.
    #[error("invalid pin")]
    InvalidPin,

    /// The term fee has not been paid.
    #[error("fees not paid for {term} term {year}")]
    FeesNotPaid {
        /// The requested term.
        term: Term,
        /// The requested academic year.
        year: i32,
    },

    /// The result has not been published for viewing.
    #[error("results not yet published for {term} term {year}")]
    NotPublished {
        /// The requested term.
        term: Term,
        /// The requested academic year.
        year: i32,
    },

    /// The requester's account is not linked to the target student.
    #[error("student {student_id} is not linked to this account")]
    NotLinked {
        /// The student identifier that was requested.
        student_id: String,
    },

    /// The requester's role does not permit the operation.
    #[error("role not permitted: {message}")]
    RoleNotPermitted {
        /// A description of the required role.
        message: String,
    },

    /// A score component was outside its permitted range.
    #[error("invalid {component} for '{subject}': {value} exceeds {max}")]
    InvalidScore {
        /// The subject whose score was invalid.
        subject: String,
        /// The assessment component (`ca1`, `ca2`, or `exam`).
        component: &'static str,
        /// The submitted value.
        value: u32,
        /// The maximum permitted value for the component.
        max: u32,
    },

    /// A subject's component sum exceeded the maximum total score.
    #[error("total exceeds 100 for '{subject}': {total}")]
    TotalExceeded {
        /// The subject whose total was invalid.
        subject: String,
        /// The offending component sum.
        total: u32,
    },

    /// Every subject in the submission had all-zero components.
    #[error("no scores entered")]
    EmptySubmission,

    /// A date range had its end before its start.
    #[error("invalid date range: {start} to {end}")]
    InvalidRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// No grading band matched the given score.
    #[error("no grading band matches score {score}")]
    UnresolvedGrade {
        /// The score that could not be classified.
        score: u32,
    },

    /// A submission carried a version stamp that no longer matches the
    /// stored result.
    #[error("stale write: expected version {expected}, found {actual}")]
    StaleWrite {
        /// The version the submitter read.
        expected: u64,
        /// The version currently stored.
        actual: u64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The backing store failed in a way that carries no business meaning.
    #[error("store error: {message}")]
    Store {
        /// A description of the store fault.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
