use tracing::info;

use crate::modules::analytics::models::{
    AnalyticsError, ReportPeriod, SalesReport, ShareTable, ShareTableError,
};

use super::{
    CategoryAllocator, DateRangeValidator, EntityRanker, RangeGuard, ScaleCalculator,
    SeriesAggregator, SeriesGenerator, WeekAligner,
};

/// Builds week-aligned sales reports.
///
/// Holds only the read-only share tables and the range limit, so one instance is shared by
/// every request.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    guard: RangeGuard,
    categories: CategoryAllocator,
    customers: EntityRanker,
}

impl AnalyticsService {
    /// Create a service from explicit tables.
    ///
    /// # Errors
    /// Fails when a table does not fit its allocator, which is a startup configuration defect.
    pub fn new(
        product_table: ShareTable,
        customer_table: ShareTable,
        max_range_months: u32,
    ) -> Result<Self, ShareTableError> {
        Ok(Self {
            guard: RangeGuard::new(max_range_months),
            categories: CategoryAllocator::new(product_table)?,
            customers: EntityRanker::new(customer_table)?,
        })
    }

    /// Create a service from the built-in product and customer tables
    pub fn with_default_tables(max_range_months: u32) -> Result<Self, ShareTableError> {
        Self::new(
            ShareTable::default_products()?,
            ShareTable::default_customers()?,
            max_range_months,
        )
    }

    pub fn max_range_months(&self) -> u32 {
        self.guard.limit_months()
    }

    /// Generate the sales report for a raw `start`/`end` pair.
    ///
    /// Validation either fully succeeds or fails with exactly one error before any computation.
    /// Identical inputs always produce identical reports.
    ///
    /// # Arguments
    /// * `start_raw` - Requested first day, `YYYY-MM-DD`
    /// * `end_raw` - Requested last day, `YYYY-MM-DD`
    pub fn generate_sales_report(
        &self,
        start_raw: Option<&str>,
        end_raw: Option<&str>,
    ) -> Result<SalesReport, AnalyticsError> {
        let range = DateRangeValidator::validate(start_raw, end_raw)?;
        let window = self.guard.check(WeekAligner::align(&range)?)?;

        let series = SeriesGenerator::generate(&window);
        let aggregate = SeriesAggregator::aggregate(&series)?;
        let scale = ScaleCalculator::calculate(&aggregate);

        let category_shares = self.categories.allocate(aggregate.total_sales);
        let entity_ranking = self
            .customers
            .rank(aggregate.total_sales, aggregate.total_orders);

        let period = ReportPeriod::new(range, window);

        info!(
            "Sales report generated: {} to {} ({} weeks), total_sales={}, total_orders={}",
            period.week_start,
            period.week_end,
            period.week_count,
            aggregate.total_sales,
            aggregate.total_orders
        );

        Ok(SalesReport {
            total_sales: aggregate.total_sales,
            total_orders: aggregate.total_orders,
            period,
            series,
            scale,
            category_shares,
            entity_ranking,
        })
    }
}
