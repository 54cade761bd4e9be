pub mod analytics;
pub mod health;

/// Register every module's routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    health::configure(cfg);
    analytics::controllers::configure(cfg);
}
