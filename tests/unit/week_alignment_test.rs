// Property-based tests for ISO week alignment and the range guard

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;
use salesboard::analytics::models::{AlignedWindow, AnalyticsError, DateRange};
use salesboard::analytics::services::{DateRangeValidator, RangeGuard, WeekAligner};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn base() -> NaiveDate {
    date(2000, 1, 1)
}

/// Test that a validated range produces the expected aligned window
#[test]
fn test_validated_range_aligns_to_iso_weeks() {
    let range = DateRangeValidator::validate(Some("2025-01-01"), Some("2025-03-31"))
        .expect("valid range");
    let window = WeekAligner::align(&range).expect("aligns");

    assert_eq!(window.week_start, date(2024, 12, 30));
    assert_eq!(window.week_end, date(2025, 4, 6));
    assert_eq!(window.week_count(), 14);
    assert!(RangeGuard::default().check(window).is_ok());
}

/// Test that a range only grows past the limit after alignment
#[test]
fn test_guard_rejects_aligned_overflow() {
    let range = DateRangeValidator::validate(Some("2025-01-01"), Some("2025-08-01"))
        .expect("valid range");
    let window = WeekAligner::align(&range).expect("aligns");

    assert_eq!(
        RangeGuard::default().check(window),
        Err(AnalyticsError::RangeTooLarge {
            week_start: date(2024, 12, 30),
            week_end: date(2025, 8, 3),
            limit_months: 6,
        })
    );
}

/// Test the canonical-format rule on raw inputs
#[test]
fn test_non_canonical_dates_rejected() {
    let max = NaiveDate::MAX.format("%Y-%m-%d").to_string();
    for raw in [
        "2025-1-01",
        "2025/01/01",
        "20250101",
        "+2025-01-01",
        "+10000-01-03",
        "-0001-01-01",
        max.as_str(),
        "2025-02-29",
    ] {
        let result = DateRangeValidator::validate(Some(raw), Some("2025-12-31"));
        assert!(
            matches!(result, Err(AnalyticsError::InvalidDateFormat { field: "start", .. })),
            "{raw} should be rejected, got {result:?}"
        );
    }
}

/// Test that surrounding whitespace is ignored
#[test]
fn test_whitespace_is_trimmed() {
    let range = DateRangeValidator::validate(Some(" 2025-01-01 "), Some("2025-01-02\t"))
        .expect("trimmed values parse");
    assert_eq!(range, DateRange::new(date(2025, 1, 1), date(2025, 1, 2)));
}

proptest! {
    /// Property: the window encloses the range, starts on Monday and ends on Sunday
    #[test]
    fn prop_window_encloses_range(
        offset in 0u64..10_000,
        span in 0u64..400,
    ) {
        let start = base() + Days::new(offset);
        let end = start + Days::new(span);
        let window = WeekAligner::align(&DateRange::new(start, end)).unwrap();

        prop_assert!(window.week_start <= start);
        prop_assert!(window.week_end >= end);
        prop_assert_eq!(window.week_start.weekday(), Weekday::Mon);
        prop_assert_eq!(window.week_end.weekday(), Weekday::Sun);

        // Alignment never adds more than six days on either side
        prop_assert!((start - window.week_start).num_days() <= 6);
        prop_assert!((window.week_end - end).num_days() <= 6);
    }

    /// Property: week_count matches the number of Mondays in the window
    #[test]
    fn prop_week_count_matches_span(
        offset in 0u64..10_000,
        span in 0u64..400,
    ) {
        let start = base() + Days::new(offset);
        let end = start + Days::new(span);
        let window = WeekAligner::align(&DateRange::new(start, end)).unwrap();

        let days = (window.week_end - window.week_start).num_days() + 1;
        prop_assert_eq!(days % 7, 0);
        prop_assert_eq!(window.week_count() as i64, days / 7);
    }

    /// Property: aligning an already aligned window is a no-op
    #[test]
    fn prop_alignment_is_idempotent(
        offset in 0u64..10_000,
        span in 0u64..400,
    ) {
        let start = base() + Days::new(offset);
        let end = start + Days::new(span);
        let window = WeekAligner::align(&DateRange::new(start, end)).unwrap();
        let again = WeekAligner::align(&DateRange::new(window.week_start, window.week_end)).unwrap();

        prop_assert_eq!(window, again);
    }

    /// Property: the guard either passes the window through unchanged or reports it
    #[test]
    fn prop_guard_passes_or_reports_window(
        offset in 0u64..10_000,
        span in 0u64..400,
        limit in 1u32..13,
    ) {
        let start = base() + Days::new(offset);
        let end = start + Days::new(span);
        let window = WeekAligner::align(&DateRange::new(start, end)).unwrap();

        match RangeGuard::new(limit).check(window) {
            Ok(checked) => prop_assert_eq!(checked, window),
            Err(AnalyticsError::RangeTooLarge { week_start, week_end, limit_months }) => {
                prop_assert_eq!(week_start, window.week_start);
                prop_assert_eq!(week_end, window.week_end);
                prop_assert_eq!(limit_months, limit);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    /// Property: windows of at most four weeks always fit in the default limit
    #[test]
    fn prop_short_windows_always_fit(offset in 0u64..10_000, weeks in 1u64..5) {
        let monday = WeekAligner::week_monday(base() + Days::new(offset)).unwrap();
        let window = AlignedWindow::new(monday, monday + Days::new(weeks * 7 - 1));

        prop_assert!(RangeGuard::default().check(window).is_ok());
    }

    /// Property: canonical date strings round-trip through the validator
    #[test]
    fn prop_canonical_dates_parse(offset in 0u64..10_000, span in 0u64..400) {
        let start = base() + Days::new(offset);
        let end = start + Days::new(span);
        let start_raw = start.format("%Y-%m-%d").to_string();
        let end_raw = end.format("%Y-%m-%d").to_string();

        let range = DateRangeValidator::validate(Some(&start_raw), Some(&end_raw));
        prop_assert_eq!(range, Ok(DateRange::new(start, end)));
    }
}
