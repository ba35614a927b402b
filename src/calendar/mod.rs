//! School-day counting.
//!
//! This module computes the number of effective instructional days in a
//! date range, excluding weekends and holiday intervals, and the plain
//! calendar-day count used as a denominator for calendar-day metrics.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::Holiday;

/// Counts the school days in `[start, end]`, inclusive.
///
/// A day counts when its weekday is Monday through Friday and it does not
/// fall within any holiday interval (holiday ranges are inclusive on both
/// ends). The walk is linear in the number of days in range; holidays
/// partly or wholly outside the range simply contribute nothing.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] when `end` is before `start`.
///
/// # Example
///
/// ```
/// use results_engine::calendar::school_days;
/// use chrono::NaiveDate;
///
/// // Mon 2024-01-01 to Fri 2024-01-05: five weekdays, no holidays.
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(school_days(start, end, &[]).unwrap(), 5);
/// ```
pub fn school_days(start: NaiveDate, end: NaiveDate, holidays: &[Holiday]) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::InvalidRange { start, end });
    }

    let mut count = 0;
    let mut day = start;
    while day <= end {
        if is_school_day(day, holidays) {
            count += 1;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(count)
}

/// Counts the calendar days in `[start, end]`, inclusive.
///
/// No weekday or holiday filtering; used as a denominator for pure
/// calendar-day metrics.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] when `end` is before `start`.
///
/// # Example
///
/// ```
/// use results_engine::calendar::total_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(total_days(start, end).unwrap(), 7);
/// ```
pub fn total_days(start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::InvalidRange { start, end });
    }
    Ok((end - start).num_days() as u32 + 1)
}

/// Checks whether a date is a school day: a weekday not covered by any
/// holiday interval.
fn is_school_day(date: NaiveDate, holidays: &[Holiday]) -> bool {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    !holidays.iter().any(|h| h.contains(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn holiday(name: &str, start: &str, end: &str) -> Holiday {
        Holiday {
            name: name.to_string(),
            start_date: date(start),
            end_date: date(end),
        }
    }

    // ==========================================================================
    // SD-001: a holiday-free week of weekdays counts 5
    // ==========================================================================
    #[test]
    fn test_sd_001_weekday_week_counts_five() {
        // Mon 2024-01-01 to Fri 2024-01-05
        assert_eq!(
            school_days(date("2024-01-01"), date("2024-01-05"), &[]).unwrap(),
            5
        );
    }

    // ==========================================================================
    // SD-002: weekends are excluded
    // ==========================================================================
    #[test]
    fn test_sd_002_full_week_still_counts_five() {
        // Mon 2024-01-01 to Sun 2024-01-07
        assert_eq!(
            school_days(date("2024-01-01"), date("2024-01-07"), &[]).unwrap(),
            5
        );
    }

    // ==========================================================================
    // SD-003: a single-Wednesday holiday subtracts exactly one
    // ==========================================================================
    #[test]
    fn test_sd_003_single_day_holiday_subtracts_one() {
        // 2024-01-03 is a Wednesday
        let holidays = vec![holiday("Staff day", "2024-01-03", "2024-01-03")];
        assert_eq!(
            school_days(date("2024-01-01"), date("2024-01-07"), &holidays).unwrap(),
            4
        );
    }

    // ==========================================================================
    // SD-004: a weekend-only holiday subtracts nothing
    // ==========================================================================
    #[test]
    fn test_sd_004_weekend_holiday_subtracts_nothing() {
        // 2024-01-06/07 are Saturday and Sunday
        let holidays = vec![holiday("Weekend event", "2024-01-06", "2024-01-07")];
        assert_eq!(
            school_days(date("2024-01-01"), date("2024-01-07"), &holidays).unwrap(),
            5
        );
    }

    // ==========================================================================
    // SD-005: end before start is an invalid range
    // ==========================================================================
    #[test]
    fn test_sd_005_reversed_range_is_invalid() {
        let result = school_days(date("2024-01-05"), date("2024-01-01"), &[]);
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));

        let result = total_days(date("2024-01-05"), date("2024-01-01"));
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }

    #[test]
    fn test_single_day_range() {
        // A Monday
        assert_eq!(
            school_days(date("2024-01-01"), date("2024-01-01"), &[]).unwrap(),
            1
        );
        // A Saturday
        assert_eq!(
            school_days(date("2024-01-06"), date("2024-01-06"), &[]).unwrap(),
            0
        );
        assert_eq!(total_days(date("2024-01-06"), date("2024-01-06")).unwrap(), 1);
    }

    #[test]
    fn test_holiday_spanning_week_boundary() {
        // Holiday Thu 2024-01-04 to Tue 2024-01-09 removes Thu, Fri, Mon, Tue.
        let holidays = vec![holiday("Break", "2024-01-04", "2024-01-09")];
        assert_eq!(
            school_days(date("2024-01-01"), date("2024-01-12"), &holidays).unwrap(),
            6
        );
    }

    #[test]
    fn test_overlapping_holidays_do_not_double_subtract() {
        let holidays = vec![
            holiday("Break A", "2024-01-03", "2024-01-04"),
            holiday("Break B", "2024-01-04", "2024-01-05"),
        ];
        // Week of 5 weekdays minus Wed, Thu, Fri.
        assert_eq!(
            school_days(date("2024-01-01"), date("2024-01-07"), &holidays).unwrap(),
            2
        );
    }

    #[test]
    fn test_holiday_entirely_outside_range_is_ignored() {
        let holidays = vec![holiday("Later break", "2024-02-01", "2024-02-05")];
        assert_eq!(
            school_days(date("2024-01-01"), date("2024-01-05"), &holidays).unwrap(),
            5
        );
    }

    #[test]
    fn test_total_days_inclusive_count() {
        assert_eq!(total_days(date("2024-01-01"), date("2024-01-07")).unwrap(), 7);
        assert_eq!(total_days(date("2024-01-01"), date("2024-01-01")).unwrap(), 1);
        // 2024 is a leap year.
        assert_eq!(total_days(date("2024-02-01"), date("2024-03-01")).unwrap(), 30);
    }

    proptest! {
        // School days never exceed total days, and a holiday-free count
        // equals the plain weekday count.
        #[test]
        fn prop_school_days_bounded_by_total(offset in 0i64..400, span in 0i64..200) {
            let start = date("2024-01-01") + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(span);
            let school = school_days(start, end, &[]).unwrap();
            let total = total_days(start, end).unwrap();
            prop_assert!(school <= total);

            let weekdays = (0..=span)
                .map(|d| start + chrono::Duration::days(d))
                .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
                .count() as u32;
            prop_assert_eq!(school, weekdays);
        }

        // Adding holidays can only reduce the count.
        #[test]
        fn prop_holidays_only_reduce(h_offset in 0i64..30, h_span in 0i64..10) {
            let start = date("2024-01-01");
            let end = date("2024-02-29");
            let h_start = start + chrono::Duration::days(h_offset);
            let holidays = vec![Holiday {
                name: "Break".to_string(),
                start_date: h_start,
                end_date: h_start + chrono::Duration::days(h_span),
            }];
            let with = school_days(start, end, &holidays).unwrap();
            let without = school_days(start, end, &[]).unwrap();
            prop_assert!(with <= without);
        }
    }
}
