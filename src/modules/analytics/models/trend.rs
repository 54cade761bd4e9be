use serde::{Deserialize, Serialize};

/// Synthetic sales figures for one ISO week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPoint {
    /// ISO week-based year, which can differ from the calendar year near January
    pub week_based_year: i32,
    /// ISO week number (1..=53)
    pub week_of_year: u32,
    /// Calendar month of the week's Monday, for display grouping only
    pub representative_month: u32,
    pub sales_amount: i64,
    pub order_count: i64,
}

/// Totals and per-metric extrema over a trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesAggregate {
    pub total_sales: i64,
    pub total_orders: i64,
    pub min_sales: i64,
    pub max_sales: i64,
    pub min_orders: i64,
    pub max_orders: i64,
}

/// Chart-axis bounds rounded outward to a display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScale {
    pub min: i64,
    pub max: i64,
}

impl AxisScale {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendScale {
    pub sales: AxisScale,
    pub orders: AxisScale,
}
