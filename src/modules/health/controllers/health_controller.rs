use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::analytics::AnalyticsService;

pub const SERVICE_NAME: &str = "salesboard";

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub share_tables: bool,
    pub max_range_months: Option<u32>,
}

/// GET /health - Liveness probe
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe
/// Ready once the analytics service and its share tables are registered
pub async fn readiness_check(service: Option<web::Data<AnalyticsService>>) -> impl Responder {
    let checks = ReadinessChecks {
        share_tables: service.is_some(),
        max_range_months: service.as_ref().map(|s| s.max_range_months()),
    };
    let response = ReadinessResponse {
        ready: checks.share_tables,
        checks,
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        tracing::error!("Readiness check failed: analytics service not registered");
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// GET / - Service banner
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
