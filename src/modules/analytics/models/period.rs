use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated, ordered calendar range as requested by the caller (both ends inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Range widened to whole ISO weeks: `week_start` is a Monday, `week_end` a Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedWindow {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
}

impl AlignedWindow {
    pub fn new(week_start: NaiveDate, week_end: NaiveDate) -> Self {
        Self {
            week_start,
            week_end,
        }
    }

    /// Number of ISO weeks covered, counting both boundary weeks
    pub fn week_count(&self) -> usize {
        ((self.week_end - self.week_start).num_days() / 7 + 1) as usize
    }
}

/// Requested and aligned boundaries reported back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub week_count: usize,
}

impl ReportPeriod {
    pub fn new(range: DateRange, window: AlignedWindow) -> Self {
        Self {
            start: range.start,
            end: range.end,
            week_start: window.week_start,
            week_end: window.week_end,
            week_count: window.week_count(),
        }
    }
}
