pub mod error;
pub mod period;
pub mod sales_report;
pub mod share_table;
pub mod trend;

pub use error::AnalyticsError;
pub use period::{AlignedWindow, DateRange, ReportPeriod};
pub use sales_report::{CategoryShare, EntityRankEntry, SalesReport};
pub use share_table::{ShareEntry, ShareTable, ShareTableError, TOTAL_WEIGHT};
pub use trend::{AxisScale, SeriesAggregate, TrendScale, WeekPoint};
