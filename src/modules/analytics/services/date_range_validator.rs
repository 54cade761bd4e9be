use chrono::NaiveDate;

use crate::modules::analytics::models::{AnalyticsError, DateRange};

/// Accepted calendar-date layout for both query fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the raw `start`/`end` query values into an ordered [`DateRange`]
pub struct DateRangeValidator;

impl DateRangeValidator {
    /// Validate the two raw date strings.
    ///
    /// Both fields are required together; a blank value counts as absent.
    /// `start` is parsed before `end`, so a request with two malformed dates reports `start`.
    ///
    /// # Errors
    /// * `MissingRange` if either value is absent or blank
    /// * `InvalidDateFormat` if a value is not a `YYYY-MM-DD` calendar date
    /// * `RangeInverted` if `start` is after `end`
    pub fn validate(
        start_raw: Option<&str>,
        end_raw: Option<&str>,
    ) -> Result<DateRange, AnalyticsError> {
        let (start_raw, end_raw) = match (Self::present(start_raw), Self::present(end_raw)) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(AnalyticsError::MissingRange),
        };

        let start = Self::parse_field("start", start_raw)?;
        let end = Self::parse_field("end", end_raw)?;

        if start > end {
            return Err(AnalyticsError::RangeInverted { start, end });
        }

        Ok(DateRange::new(start, end))
    }

    fn present(raw: Option<&str>) -> Option<&str> {
        raw.map(str::trim).filter(|s| !s.is_empty())
    }

    fn parse_field(field: &'static str, raw: &str) -> Result<NaiveDate, AnalyticsError> {
        let invalid = || AnalyticsError::InvalidDateFormat {
            field,
            value: raw.to_string(),
        };

        // chrono's %Y takes signed years of any width, so the layout is checked first
        if !Self::has_canonical_shape(raw) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
    }

    /// Exactly `DDDD-DD-DD` in ASCII digits
    fn has_canonical_shape(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
    }
}
