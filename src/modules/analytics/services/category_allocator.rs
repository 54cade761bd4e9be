use crate::modules::analytics::models::{CategoryShare, ShareTable, ShareTableError};

use super::allocation::weighted_portion;

/// Number of table entries reported by name
pub const TOP_CATEGORY_COUNT: usize = 5;
pub const OTHERS_CODE: &str = "ETC";
pub const OTHERS_NAME: &str = "Others";

/// Splits total sales into the leading product buckets plus one catch-all bucket
#[derive(Debug, Clone)]
pub struct CategoryAllocator {
    table: ShareTable,
}

impl CategoryAllocator {
    /// # Errors
    /// The table must hold at least [`TOP_CATEGORY_COUNT`] entries and must not already use the
    /// catch-all code.
    pub fn new(table: ShareTable) -> Result<Self, ShareTableError> {
        if table.len() < TOP_CATEGORY_COUNT {
            return Err(ShareTableError::TooFewEntries {
                required: TOP_CATEGORY_COUNT,
                actual: table.len(),
            });
        }

        if table.entries().iter().any(|e| e.code == OTHERS_CODE) {
            return Err(ShareTableError::DuplicateCode {
                code: OTHERS_CODE.to_string(),
            });
        }

        Ok(Self { table })
    }

    /// Always returns `TOP_CATEGORY_COUNT + 1` shares with the catch-all last.
    ///
    /// `share_percent` is copied from the table so the shares add up to exactly 100 whatever
    /// rounding does to `sales`.
    pub fn allocate(&self, total_sales: i64) -> Vec<CategoryShare> {
        let (top, rest) = self.table.entries().split_at(TOP_CATEGORY_COUNT);

        let mut shares: Vec<CategoryShare> = top
            .iter()
            .map(|entry| CategoryShare {
                code: entry.code.clone(),
                name: entry.name.clone(),
                sales: weighted_portion(total_sales, entry.weight),
                share_percent: entry.weight,
            })
            .collect();

        let others_weight: u32 = rest.iter().map(|e| e.weight).sum();
        shares.push(CategoryShare {
            code: OTHERS_CODE.to_string(),
            name: OTHERS_NAME.to_string(),
            sales: weighted_portion(total_sales, others_weight),
            share_percent: others_weight,
        });

        shares
    }
}
