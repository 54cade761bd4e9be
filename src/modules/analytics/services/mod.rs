pub mod aggregator;
pub mod allocation;
pub mod analytics_service;
pub mod category_allocator;
pub mod date_range_validator;
pub mod entity_ranker;
pub mod range_guard;
pub mod scale_calculator;
pub mod series_generator;
pub mod week_aligner;

pub use aggregator::SeriesAggregator;
pub use analytics_service::AnalyticsService;
pub use category_allocator::CategoryAllocator;
pub use date_range_validator::DateRangeValidator;
pub use entity_ranker::EntityRanker;
pub use range_guard::{RangeGuard, DEFAULT_MAX_RANGE_MONTHS};
pub use scale_calculator::ScaleCalculator;
pub use series_generator::SeriesGenerator;
pub use week_aligner::WeekAligner;
