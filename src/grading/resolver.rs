//! Banded grade lookup.

use serde::{Deserialize, Serialize};

use crate::config::GradingScaleEntry;
use crate::error::{EngineError, EngineResult};

/// A grade resolved from a banded scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGrade {
    /// The letter grade of the matched band.
    pub grade: String,
    /// The remark of the matched band.
    pub remark: String,
}

/// Resolves a score against an ordered set of grading bands.
///
/// Scans `scales` in collection order and returns the first band where
/// `min <= score <= max`. Callers must pre-filter to the intended scale
/// set before calling; within a set, overlapping bands resolve to the
/// first match.
///
/// A score above 100 has no band by construction and fails closed: the
/// lowest band of the set is returned, treating the score as failing.
///
/// # Errors
///
/// Returns [`EngineError::UnresolvedGrade`] when no band matches an
/// in-range score (a gap in the configured bands), or when `scales` is
/// empty.
///
/// # Example
///
/// ```
/// use results_engine::config::{GradingScaleEntry, ScaleSet};
/// use results_engine::grading::resolve_grade;
///
/// let bands = vec![
///     GradingScaleEntry {
///         scale_set: ScaleSet::Primary,
///         min: 70,
///         max: 100,
///         grade: "A".to_string(),
///         remark: "Excellent".to_string(),
///     },
///     GradingScaleEntry {
///         scale_set: ScaleSet::Primary,
///         min: 0,
///         max: 69,
///         grade: "F".to_string(),
///         remark: "Fail".to_string(),
///     },
/// ];
/// let refs: Vec<&GradingScaleEntry> = bands.iter().collect();
///
/// let resolved = resolve_grade(85, &refs).unwrap();
/// assert_eq!(resolved.grade, "A");
/// ```
pub fn resolve_grade(score: u32, scales: &[&GradingScaleEntry]) -> EngineResult<ResolvedGrade> {
    if let Some(band) = scales.iter().find(|band| band.contains(score)) {
        return Ok(ResolvedGrade {
            grade: band.grade.clone(),
            remark: band.remark.clone(),
        });
    }

    // Out-of-range scores fail closed to the lowest band.
    if score > 100 {
        if let Some(lowest) = scales.iter().min_by_key(|band| band.min) {
            return Ok(ResolvedGrade {
                grade: lowest.grade.clone(),
                remark: lowest.remark.clone(),
            });
        }
    }

    Err(EngineError::UnresolvedGrade { score })
}

/// Checks whether a grade is outside the configured failing set.
///
/// # Example
///
/// ```
/// use results_engine::grading::is_passing_grade;
///
/// let failing = vec!["F".to_string(), "F9".to_string()];
/// assert!(is_passing_grade("B3", &failing));
/// assert!(!is_passing_grade("F9", &failing));
/// ```
pub fn is_passing_grade(grade: &str, failing_grades: &[String]) -> bool {
    !failing_grades.iter().any(|f| f == grade)
}
