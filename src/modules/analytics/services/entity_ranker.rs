use crate::modules::analytics::models::{EntityRankEntry, ShareTable, ShareTableError};

use super::allocation::weighted_portion;

/// Size of the top-customer panel
pub const RANKED_ENTITY_COUNT: usize = 10;

/// Splits total sales and orders across a fixed panel of customers, in table order
#[derive(Debug, Clone)]
pub struct EntityRanker {
    table: ShareTable,
}

impl EntityRanker {
    pub fn new(table: ShareTable) -> Result<Self, ShareTableError> {
        if table.len() != RANKED_ENTITY_COUNT {
            return Err(ShareTableError::EntryCount {
                required: RANKED_ENTITY_COUNT,
                actual: table.len(),
            });
        }

        Ok(Self { table })
    }

    pub fn rank(&self, total_sales: i64, total_orders: i64) -> Vec<EntityRankEntry> {
        self.table
            .entries()
            .iter()
            .enumerate()
            .map(|(position, entry)| EntityRankEntry {
                code: entry.code.clone(),
                name: entry.name.clone(),
                // a low-weight customer never shows zero orders
                order_count: weighted_portion(total_orders, entry.weight).max(1),
                sales: weighted_portion(total_sales, entry.weight),
                active: position % 2 == 0,
            })
            .collect()
    }
}
