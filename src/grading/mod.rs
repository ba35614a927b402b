//! Grade resolution over banded scales.
//!
//! This module maps a numeric score to a letter grade and remark using an
//! ordered set of banded thresholds, and exposes the passing predicate
//! consumed by analytics aggregation.

mod resolver;

pub use resolver::{is_passing_grade, resolve_grade, ResolvedGrade};
