use crate::modules::analytics::models::{AxisScale, SeriesAggregate, TrendScale};

pub const SALES_SCALE_UNIT: i64 = 10_000_000;
pub const ORDER_SCALE_UNIT: i64 = 5;

/// Derives chart-axis bounds that never cut into the plotted data
pub struct ScaleCalculator;

impl ScaleCalculator {
    pub fn calculate(aggregate: &SeriesAggregate) -> TrendScale {
        TrendScale {
            sales: Self::axis(aggregate.min_sales, aggregate.max_sales, SALES_SCALE_UNIT),
            orders: Self::axis(aggregate.min_orders, aggregate.max_orders, ORDER_SCALE_UNIT),
        }
    }

    /// Round `min` down and `max` up to multiples of `unit`
    pub fn axis(min: i64, max: i64, unit: i64) -> AxisScale {
        AxisScale::new(floor_to(min, unit), ceil_to(max, unit))
    }
}

fn floor_to(value: i64, unit: i64) -> i64 {
    value.div_euclid(unit) * unit
}

fn ceil_to(value: i64, unit: i64) -> i64 {
    let floored = floor_to(value, unit);
    if floored == value {
        value
    } else {
        floored + unit
    }
}
