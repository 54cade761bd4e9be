//! Salesboard Sales Analytics Library
//!
//! Turns a calendar date range into a week-aligned sales report: weekly trend, chart scale,
//! product share and top customers.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::analytics;
pub use modules::analytics::{AnalyticsError, AnalyticsService, SalesReport};
