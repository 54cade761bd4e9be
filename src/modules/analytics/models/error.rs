use chrono::NaiveDate;
use serde_json::json;

/// Failures raised by the sales analytics pipeline.
///
/// Every variant except `EmptySeries` is an input-validation failure detected before any
/// computation starts. None of them are retryable without corrected input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Invalid {field} date '{value}'. Expected YYYY-MM-DD")]
    InvalidDateFormat { field: &'static str, value: String },

    #[error("Both start and end dates are required")]
    MissingRange,

    #[error("start ({start}) must be before or equal to end ({end})")]
    RangeInverted { start: NaiveDate, end: NaiveDate },

    #[error(
        "Aligned range {week_start} to {week_end} exceeds the maximum of {limit_months} months"
    )]
    RangeTooLarge {
        week_start: NaiveDate,
        week_end: NaiveDate,
        limit_months: u32,
    },

    /// Aligning a boundary week ran past the supported calendar
    #[error("Date {date} is outside the supported calendar range")]
    DateOutOfRange { date: NaiveDate },

    /// Aggregation was handed an empty series. Unreachable from validated input.
    #[error("Cannot aggregate an empty trend series")]
    EmptySeries,
}

impl AnalyticsError {
    pub fn code(&self) -> &'static str {
        match self {
            AnalyticsError::InvalidDateFormat { .. } => "INVALID_DATE_FORMAT",
            AnalyticsError::MissingRange => "MISSING_RANGE",
            AnalyticsError::RangeInverted { .. } => "RANGE_INVERTED",
            AnalyticsError::RangeTooLarge { .. } => "RANGE_TOO_LARGE",
            AnalyticsError::DateOutOfRange { .. } => "DATE_OUT_OF_RANGE",
            AnalyticsError::EmptySeries => "INTERNAL_ERROR",
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, AnalyticsError::EmptySeries)
    }

    /// Body of the `errors` field in a failed response
    pub fn details(&self) -> serde_json::Value {
        match self {
            AnalyticsError::InvalidDateFormat { field, .. } => {
                json!({ "code": self.code(), "field": field })
            }
            AnalyticsError::RangeInverted { start, end } => json!({
                "code": self.code(),
                "start": start.to_string(),
                "end": end.to_string(),
            }),
            AnalyticsError::RangeTooLarge {
                week_start,
                week_end,
                limit_months,
            } => json!({
                "code": self.code(),
                "weekStart": week_start.to_string(),
                "weekEnd": week_end.to_string(),
                "limitMonths": limit_months,
            }),
            AnalyticsError::DateOutOfRange { date } => {
                json!({ "code": self.code(), "date": date.to_string() })
            }
            AnalyticsError::MissingRange | AnalyticsError::EmptySeries => {
                json!({ "code": self.code() })
            }
        }
    }
}
