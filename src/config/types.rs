//! Configuration data structures.
//!
//! These types mirror the YAML configuration files loaded by
//! [`ConfigLoader`](super::ConfigLoader).

use serde::{Deserialize, Serialize};

use crate::models::TermCalendar;

/// Which grading scale set a band belongs to.
///
/// Both sets live in the same collection in storage; the explicit tag
/// replaces the ambiguous first-match resolution the data would otherwise
/// force. Callers select the set from the student's school level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleSet {
    /// The 6-band A–F scale used for primary classes.
    Primary,
    /// The 9-band A1–F9 scale used for secondary classes.
    Secondary,
}

/// One banded threshold of a grading scale.
///
/// A score `s` falls in this band when `min <= s <= max`. The bands of a
/// set are expected to partition `[0, 100]`; this is a data expectation,
/// not an enforced constraint.
///
/// # Example
///
/// ```
/// use results_engine::config::{GradingScaleEntry, ScaleSet};
///
/// let band = GradingScaleEntry {
///     scale_set: ScaleSet::Secondary,
///     min: 75,
///     max: 100,
///     grade: "A1".to_string(),
///     remark: "Excellent".to_string(),
/// };
/// assert!(band.contains(85));
/// assert!(!band.contains(74));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingScaleEntry {
    /// The scale set this band belongs to.
    pub scale_set: ScaleSet,
    /// The lowest score in the band (inclusive).
    pub min: u32,
    /// The highest score in the band (inclusive).
    pub max: u32,
    /// The letter grade (e.g., "A", "B3", "F9").
    pub grade: String,
    /// The remark attached to the grade (e.g., "Excellent").
    pub remark: String,
}

impl GradingScaleEntry {
    /// Checks whether a score falls in this band, inclusive on both ends.
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// The grading section of the configuration (`scales.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// All grading bands, both scale sets together.
    pub scales: Vec<GradingScaleEntry>,
    /// Grades counted as failing (e.g., `["F", "F9"]`).
    #[serde(default)]
    pub failing_grades: Vec<String>,
}

/// The calendar section of the configuration (`calendar.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// One calendar per configured `(term, year)` pair.
    pub terms: Vec<TermCalendar>,
}
