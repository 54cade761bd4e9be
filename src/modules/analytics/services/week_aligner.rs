use chrono::{Datelike, Days, NaiveDate};

use crate::modules::analytics::models::{AlignedWindow, AnalyticsError, DateRange};

/// Expands a date range outward to whole ISO-8601 weeks (Monday through Sunday)
pub struct WeekAligner;

impl WeekAligner {
    /// # Errors
    /// `DateOutOfRange` when a boundary week runs past the supported calendar
    pub fn align(range: &DateRange) -> Result<AlignedWindow, AnalyticsError> {
        let week_start = Self::week_monday(range.start).ok_or(AnalyticsError::DateOutOfRange {
            date: range.start,
        })?;
        let week_end = Self::week_sunday(range.end).ok_or(AnalyticsError::DateOutOfRange {
            date: range.end,
        })?;

        Ok(AlignedWindow::new(week_start, week_end))
    }

    /// Monday of the ISO week containing `date`
    pub fn week_monday(date: NaiveDate) -> Option<NaiveDate> {
        date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
    }

    /// Sunday of the ISO week containing `date`
    pub fn week_sunday(date: NaiveDate) -> Option<NaiveDate> {
        date.checked_add_days(Days::new(u64::from(6 - date.weekday().num_days_from_monday())))
    }
}
