use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::modules::analytics::models::TOTAL_WEIGHT;

/// `round(total * weight / 100)`, half away from zero.
///
/// The division is exact in `Decimal`; only the final rounding loses precision.
/// `weight` must not exceed [`TOTAL_WEIGHT`], which every validated share table guarantees.
pub fn weighted_portion(total: i64, weight: u32) -> i64 {
    debug_assert!(weight <= TOTAL_WEIGHT);

    let portion = Decimal::from(total) * Decimal::from(weight) / Decimal::ONE_HUNDRED;

    // |portion| <= |total| while weight <= 100, and rounding never passes the integer |total|
    portion
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .expect("weighted portion of an i64 total fits in i64")
}
