use chrono::{Datelike, Days, NaiveDate};
use std::f64::consts::PI;
use tracing::debug;

use crate::modules::analytics::models::{AlignedWindow, WeekPoint};

pub const BASE_SALES: i64 = 180_000_000;
pub const SEASONAL_AMPLITUDE: f64 = 30_000_000.0;
pub const SEASONAL_PERIOD: usize = 13;
pub const STEP_PERIOD: usize = 3;
pub const STEP_SIZE: i64 = 8_000_000;
pub const HASH_MODULUS: i64 = 5;
pub const HASH_UNIT: i64 = 3_000_000;
/// Weekly sales are truncated to this grid
pub const SALES_GRID: i64 = 10_000;
pub const SALES_FLOOR: i64 = 50_000_000;
pub const BASE_ORDERS: i64 = 120;
const ORDER_STEP_PERIOD: usize = 6;
const ORDER_STEP_SIZE: i64 = 5;
const ORDER_HASH_MODULUS: i64 = 7;

/// Produces one deterministic synthetic data point per ISO week.
///
/// The formulas are a fixed display contract: output depends only on the window, never on the
/// clock or a random seed.
pub struct SeriesGenerator;

impl SeriesGenerator {
    pub fn generate(window: &AlignedWindow) -> Vec<WeekPoint> {
        let week_count = window.week_count();
        debug!(
            "Generating {} weekly points from {} to {}",
            week_count, window.week_start, window.week_end
        );

        (0..week_count)
            .map(|index| {
                let cursor = window.week_start + Days::new(7 * index as u64);
                Self::point(index, cursor)
            })
            .collect()
    }

    /// Data point for the `index`-th week of a window, whose Monday is `cursor`
    pub fn point(index: usize, cursor: NaiveDate) -> WeekPoint {
        let iso = cursor.iso_week();
        let week_based_year = iso.year();
        let week_of_year = iso.week();

        WeekPoint {
            week_based_year,
            week_of_year,
            representative_month: cursor.month(),
            sales_amount: Self::sales_amount(index, week_based_year, week_of_year),
            order_count: Self::order_count(index, week_based_year, week_of_year),
        }
    }

    fn sales_amount(index: usize, week_based_year: i32, week_of_year: u32) -> i64 {
        let phase = 2.0 * PI * (index % SEASONAL_PERIOD) as f64 / SEASONAL_PERIOD as f64;
        let seasonal = (SEASONAL_AMPLITUDE * phase.sin()).round() as i64;
        let step = (index % STEP_PERIOD) as i64 * STEP_SIZE;
        let week_key = i64::from(week_based_year) * 100 + i64::from(week_of_year);
        let hash = week_key.rem_euclid(HASH_MODULUS) * HASH_UNIT;

        let raw = BASE_SALES + seasonal + step + hash;
        (raw.div_euclid(SALES_GRID) * SALES_GRID).max(SALES_FLOOR)
    }

    fn order_count(index: usize, week_based_year: i32, week_of_year: u32) -> i64 {
        let step = (index % ORDER_STEP_PERIOD) as i64 * ORDER_STEP_SIZE;
        let hash = (i64::from(week_based_year) + i64::from(week_of_year)).rem_euclid(ORDER_HASH_MODULUS);

        BASE_ORDERS + step + hash
    }
}
