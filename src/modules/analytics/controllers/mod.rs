mod analytics_controller;

pub use analytics_controller::{
    get_sales_analytics, SalesAnalyticsQuery, SalesAnalyticsResponse, SUCCESS_MESSAGE,
};

// Re-export configure for main.rs
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    analytics_controller::configure(cfg);
}
