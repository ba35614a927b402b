//! Academic term and holiday models.
//!
//! This module contains the [`Term`] identifier, the [`Holiday`] interval,
//! and the [`TermCalendar`] that binds a term's date range to its holidays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the three academic terms in a school year.
///
/// Terms serialize to the short forms used throughout the wire format
/// and stored records: `"1st"`, `"2nd"`, `"3rd"`.
///
/// # Example
///
/// ```
/// use results_engine::models::Term;
///
/// let term: Term = serde_json::from_str("\"1st\"").unwrap();
/// assert_eq!(term, Term::First);
/// assert_eq!(term.to_string(), "1st");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// The first term of the academic year.
    #[serde(rename = "1st")]
    First,
    /// The second term of the academic year.
    #[serde(rename = "2nd")]
    Second,
    /// The third term of the academic year.
    #[serde(rename = "3rd")]
    Third,
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::First => write!(f, "1st"),
            Term::Second => write!(f, "2nd"),
            Term::Third => write!(f, "3rd"),
        }
    }
}

/// A named holiday interval within a term.
///
/// School-day counting excludes every date in `[start_date, end_date]`,
/// inclusive on both ends.
///
/// # Example
///
/// ```
/// use results_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     name: "Mid-term break".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 10, 27).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
/// };
/// assert!(holiday.contains(NaiveDate::from_ymd_opt(2025, 10, 29).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The name of the holiday (e.g., "Mid-term break").
    pub name: String,
    /// The first day of the holiday (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the holiday (inclusive).
    pub end_date: NaiveDate,
}

impl Holiday {
    /// Checks whether a date falls within this holiday, inclusive on
    /// both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// The configured calendar for one `(term, year)` pair.
///
/// Holds the term's inclusive date range and its holiday intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCalendar {
    /// The term this calendar describes.
    pub term: Term,
    /// The academic year this calendar describes.
    pub year: i32,
    /// The first day of the term (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the term (inclusive).
    pub end_date: NaiveDate,
    /// Holiday intervals within the term.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}
