pub mod controllers;
pub mod models;
pub mod services;

pub use models::{AnalyticsError, SalesReport, ShareTable};
pub use services::AnalyticsService;
