//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading school
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Term, TermCalendar};

use super::types::{CalendarConfig, GradingConfig, GradingScaleEntry, ScaleSet};

/// Loads and provides access to school configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query grading bands and term calendars.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/school/
/// ├── scales.yaml    # Grading bands (both scale sets) and failing grades
/// └── calendar.yaml  # Term date ranges and holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use results_engine::config::{ConfigLoader, ScaleSet};
///
/// let loader = ConfigLoader::load("./config/school").unwrap();
///
/// let secondary = loader.scale_set(ScaleSet::Secondary);
/// println!("Secondary scale has {} bands", secondary.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    grading: GradingConfig,
    calendar: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/school")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scales_path = path.join("scales.yaml");
        let grading = Self::load_yaml::<GradingConfig>(&scales_path)?;

        let calendar_path = path.join("calendar.yaml");
        let calendar = Self::load_yaml::<CalendarConfig>(&calendar_path)?;

        Ok(Self { grading, calendar })
    }

    /// Builds a loader directly from parsed sections, for tests and
    /// embedded use.
    pub fn from_parts(grading: GradingConfig, calendar: CalendarConfig) -> Self {
        Self { grading, calendar }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the grading section.
    pub fn grading(&self) -> &GradingConfig {
        &self.grading
    }

    /// Returns the bands of one scale set, in configured order.
    ///
    /// Callers must pass the intended set; the two sets share one
    /// collection and an unfiltered scan would resolve ambiguously.
    pub fn scale_set(&self, set: ScaleSet) -> Vec<&GradingScaleEntry> {
        self.grading
            .scales
            .iter()
            .filter(|band| band.scale_set == set)
            .collect()
    }

    /// Checks whether a grade is outside the configured failing set.
    pub fn is_passing_grade(&self, grade: &str) -> bool {
        crate::grading::is_passing_grade(grade, &self.grading.failing_grades)
    }

    /// Finds the calendar configured for a term and year, if any.
    pub fn term_calendar(&self, term: Term, year: i32) -> Option<&TermCalendar> {
        self.calendar
            .terms
            .iter()
            .find(|c| c.term == term && c.year == year)
    }

    /// Collects the holidays of every configured term whose range
    /// overlaps `[start, end]`.
    pub fn holidays_overlapping(
        &self,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> Vec<crate::models::Holiday> {
        self.calendar
            .terms
            .iter()
            .filter(|c| c.start_date <= end && c.end_date >= start)
            .flat_map(|c| c.holidays.iter().cloned())
            .collect()
    }
}
