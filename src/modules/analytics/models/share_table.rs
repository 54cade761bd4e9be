use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Total every share table must add up to
pub const TOTAL_WEIGHT: u32 = 100;

const DEFAULT_PRODUCTS: &[(&str, &str, u32)] = &[
    ("PRD-001", "Smartphone Case", 24),
    ("PRD-002", "Wireless Earbuds", 19),
    ("PRD-003", "Charging Cable", 15),
    ("PRD-004", "Screen Protector", 12),
    ("PRD-005", "Bluetooth Speaker", 10),
    ("PRD-006", "Power Bank", 8),
    ("PRD-007", "Smart Watch Strap", 7),
    ("PRD-008", "Tablet Stand", 5),
];

const DEFAULT_CUSTOMERS: &[(&str, &str, u32)] = &[
    ("CUS-001", "Hanbit Electronics", 18),
    ("CUS-002", "Daehan Retail", 15),
    ("CUS-003", "Mirae Distribution", 13),
    ("CUS-004", "Seoul Mobile Mart", 11),
    ("CUS-005", "Nuri Trading", 10),
    ("CUS-006", "Gaon Commerce", 9),
    ("CUS-007", "Haneul Supplies", 8),
    ("CUS-008", "Busan Digital", 7),
    ("CUS-009", "Jeju Gadget House", 5),
    ("CUS-010", "Incheon Wholesale", 4),
];

/// Construction-time failures of a share table
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareTableError {
    #[error("share table has no entries")]
    Empty,

    #[error("share table entry at position {position} has a blank code")]
    BlankCode { position: usize },

    #[error("share table code '{code}' appears more than once")]
    DuplicateCode { code: String },

    #[error("weight {weight} for '{code}' is outside 0..=100")]
    WeightOutOfRange { code: String, weight: u32 },

    #[error("weights sum to {total}, expected 100")]
    WeightSum { total: u32 },

    #[error("share table needs at least {required} entries, got {actual}")]
    TooFewEntries { required: usize, actual: usize },

    #[error("share table needs exactly {required} entries, got {actual}")]
    EntryCount { required: usize, actual: usize },
}

/// One named bucket with its integer percentage weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareEntry {
    pub code: String,
    pub name: String,
    pub weight: u32,
}

impl ShareEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>, weight: u32) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            weight,
        }
    }
}

/// Ordered list of named weights summing to 100.
///
/// Validated once when built; holders never re-check it per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTable {
    entries: Vec<ShareEntry>,
}

impl ShareTable {
    pub fn new(entries: Vec<ShareEntry>) -> Result<Self, ShareTableError> {
        if entries.is_empty() {
            return Err(ShareTableError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut total: u32 = 0;

        for (position, entry) in entries.iter().enumerate() {
            if entry.code.trim().is_empty() {
                return Err(ShareTableError::BlankCode { position });
            }
            if !seen.insert(entry.code.as_str()) {
                return Err(ShareTableError::DuplicateCode {
                    code: entry.code.clone(),
                });
            }
            if entry.weight > TOTAL_WEIGHT {
                return Err(ShareTableError::WeightOutOfRange {
                    code: entry.code.clone(),
                    weight: entry.weight,
                });
            }
            total = total.saturating_add(entry.weight);
        }

        if total != TOTAL_WEIGHT {
            return Err(ShareTableError::WeightSum { total });
        }

        Ok(Self { entries })
    }

    pub fn from_rows(rows: &[(&str, &str, u32)]) -> Result<Self, ShareTableError> {
        Self::new(
            rows.iter()
                .map(|(code, name, weight)| ShareEntry::new(*code, *name, *weight))
                .collect(),
        )
    }

    /// Product catalogue used for the category breakdown
    pub fn default_products() -> Result<Self, ShareTableError> {
        Self::from_rows(DEFAULT_PRODUCTS)
    }

    /// Customer panel used for the top-customer ranking
    pub fn default_customers() -> Result<Self, ShareTableError> {
        Self::from_rows(DEFAULT_CUSTOMERS)
    }

    pub fn entries(&self) -> &[ShareEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
