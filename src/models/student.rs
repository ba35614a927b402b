//! Student document model.
//!
//! The student is the aggregate root of this engine: term fees, term
//! results, and attendance entries are embedded in the student document,
//! keyed informally by `(term, year)` — at most one fee and one result
//! exist per pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fee::TermFee;
use super::result::TermResult;
use super::term::Term;

/// The school level a student is enrolled in.
///
/// Selects which grading scale set applies to the student's scores:
/// primary uses the 6-band A–F scale, secondary the 9-band A1–F9 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolLevel {
    /// Primary school, graded on the 6-band scale.
    Primary,
    /// Secondary school, graded on the 9-band scale.
    Secondary,
}

/// One day's attendance mark for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The school day this entry marks.
    pub date: NaiveDate,
    /// Whether the student was present.
    pub present: bool,
}

/// A student document.
///
/// # Example
///
/// ```
/// use results_engine::models::{SchoolLevel, Student};
///
/// let student = Student::new("STU-0042", "Ada Obi", "JSS 2A", SchoolLevel::Secondary);
/// assert!(student.term_fees.is_empty());
/// assert!(student.results.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier for the student.
    pub student_id: String,
    /// The student's full name.
    pub name: String,
    /// The classroom the student currently belongs to.
    pub current_class: String,
    /// The school level, selecting the grading scale set.
    pub level: SchoolLevel,
    /// The user account linked to the student, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// The parent user account linked to the student, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Per-term fee records, at most one per `(term, year)`.
    #[serde(default)]
    pub term_fees: Vec<TermFee>,
    /// Per-term result records, at most one per `(term, year)`.
    #[serde(default)]
    pub results: Vec<TermResult>,
    /// Daily attendance marks.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

impl Student {
    /// Creates a student with no fees, results, or attendance recorded.
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        current_class: impl Into<String>,
        level: SchoolLevel,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            current_class: current_class.into(),
            level,
            user_id: None,
            parent_id: None,
            term_fees: Vec::new(),
            results: Vec::new(),
            attendance: Vec::new(),
        }
    }

    /// Finds the fee record for a term and year, if one exists.
    pub fn term_fee(&self, term: Term, year: i32) -> Option<&TermFee> {
        self.term_fees.iter().find(|f| f.is_for(term, year))
    }

    /// Finds the result record for a term and year, if one exists.
    pub fn result(&self, term: Term, year: i32) -> Option<&TermResult> {
        self.results.iter().find(|r| r.is_for(term, year))
    }

    /// Counts days in `[start, end]` (inclusive) on which the student was
    /// marked present.
    pub fn days_present(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        self.attendance
            .iter()
            .filter(|e| e.present && e.date >= start && e.date <= end)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_student() -> Student {
        let mut student = Student::new("STU-0042", "Ada Obi", "JSS 2A", SchoolLevel::Secondary);
        student.term_fees.push(TermFee {
            term: Term::First,
            year: 2025,
            amount: Decimal::new(45_000, 0),
            paid: true,
            pin_code: "1234".to_string(),
            viewable: true,
            payment_date: None,
            payment_method: None,
        });
        student
    }

    #[test]
    fn test_term_fee_lookup_finds_matching_pair() {
        let student = sample_student();
        let fee = student.term_fee(Term::First, 2025).unwrap();
        assert_eq!(fee.pin_code, "1234");
    }

    #[test]
    fn test_term_fee_lookup_misses_other_pairs() {
        let student = sample_student();
        assert!(student.term_fee(Term::Second, 2025).is_none());
        assert!(student.term_fee(Term::First, 2024).is_none());
    }

    #[test]
    fn test_result_lookup_on_empty_record() {
        let student = sample_student();
        assert!(student.result(Term::First, 2025).is_none());
    }

    #[test]
    fn test_days_present_counts_only_present_in_range() {
        let mut student = sample_student();
        let dates = [
            (NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(), true),
            (NaiveDate::from_ymd_opt(2025, 9, 9).unwrap(), false),
            (NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(), true),
            (NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(), true),
        ];
        for (date, present) in dates {
            student.attendance.push(AttendanceEntry { date, present });
        }

        let start = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 9, 12).unwrap();
        assert_eq!(student.days_present(start, end), 2);
    }

    #[test]
    fn test_deserialize_student_with_defaults() {
        let json = r#"{
            "student_id": "STU-0001",
            "name": "Bola Ade",
            "current_class": "Primary 4",
            "level": "primary"
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.level, SchoolLevel::Primary);
        assert!(student.user_id.is_none());
        assert!(student.term_fees.is_empty());
        assert!(student.attendance.is_empty());
    }
}
