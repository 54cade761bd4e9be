use crate::modules::analytics::models::{AnalyticsError, SeriesAggregate, WeekPoint};

/// Computes range totals and per-metric extrema over a trend series
pub struct SeriesAggregator;

impl SeriesAggregator {
    /// # Errors
    /// Returns `EmptySeries` for an empty slice. Aligned windows always hold at least one week,
    /// so this only fires on a caller bug.
    pub fn aggregate(series: &[WeekPoint]) -> Result<SeriesAggregate, AnalyticsError> {
        let first = series.first().ok_or(AnalyticsError::EmptySeries)?;

        let seed = SeriesAggregate {
            total_sales: 0,
            total_orders: 0,
            min_sales: first.sales_amount,
            max_sales: first.sales_amount,
            min_orders: first.order_count,
            max_orders: first.order_count,
        };

        Ok(series.iter().fold(seed, |acc, point| SeriesAggregate {
            total_sales: acc.total_sales + point.sales_amount,
            total_orders: acc.total_orders + point.order_count,
            min_sales: acc.min_sales.min(point.sales_amount),
            max_sales: acc.max_sales.max(point.sales_amount),
            min_orders: acc.min_orders.min(point.order_count),
            max_orders: acc.max_orders.max(point.order_count),
        }))
    }
}
