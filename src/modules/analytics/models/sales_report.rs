use serde::{Deserialize, Serialize};

use super::period::ReportPeriod;
use super::trend::{TrendScale, WeekPoint};

/// Sales attributed to one product bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub code: String,
    pub name: String,
    pub sales: i64,
    /// Table weight, not recomputed from the rounded `sales`
    pub share_percent: u32,
}

/// One row of the top-customer panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRankEntry {
    pub code: String,
    pub name: String,
    pub order_count: i64,
    pub sales: i64,
    pub active: bool,
}

/// Week-aligned sales analytics for one requested range.
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    pub total_sales: i64,
    pub total_orders: i64,
    pub period: ReportPeriod,
    pub series: Vec<WeekPoint>,
    pub scale: TrendScale,
    pub category_shares: Vec<CategoryShare>,
    pub entity_ranking: Vec<EntityRankEntry>,
}

impl SalesReport {
    /// Sum of the category weights; 100 for any report built from a valid table
    pub fn total_share_percent(&self) -> u32 {
        self.category_shares.iter().map(|c| c.share_percent).sum()
    }
}
