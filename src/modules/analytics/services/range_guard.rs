use chrono::Months;
use tracing::debug;

use crate::modules::analytics::models::{AlignedWindow, AnalyticsError};

/// Longest aligned window a single report may cover
pub const DEFAULT_MAX_RANGE_MONTHS: u32 = 6;

/// Rejects aligned windows longer than a calendar-month budget.
///
/// The budget is measured from the aligned Monday, so the days added by alignment count
/// against it.
#[derive(Debug, Clone, Copy)]
pub struct RangeGuard {
    limit_months: u32,
}

impl RangeGuard {
    pub fn new(limit_months: u32) -> Self {
        Self { limit_months }
    }

    pub fn limit_months(&self) -> u32 {
        self.limit_months
    }

    pub fn check(&self, window: AlignedWindow) -> Result<AlignedWindow, AnalyticsError> {
        let limit_end = window
            .week_start
            .checked_add_months(Months::new(self.limit_months));

        match limit_end {
            Some(limit_end) if window.week_end <= limit_end => Ok(window),
            _ => {
                debug!(
                    "Window {} to {} exceeds limit end {:?}",
                    window.week_start, window.week_end, limit_end
                );
                Err(AnalyticsError::RangeTooLarge {
                    week_start: window.week_start,
                    week_end: window.week_end,
                    limit_months: self.limit_months,
                })
            }
        }
    }
}

impl Default for RangeGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RANGE_MONTHS)
    }
}
