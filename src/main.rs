use actix_web::{web, App, HttpServer};
use anyhow::Context;
use salesboard::config::Config;
use salesboard::middleware::{not_found, query_config, RequestId};
use salesboard::modules::{self, analytics::AnalyticsService};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("salesboard={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.app.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Salesboard sales analytics service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Table defects fail startup
    let service = AnalyticsService::with_default_tables(config.analytics.max_range_months)
        .context("Invalid analytics share tables")?;
    let service = web::Data::new(service);

    tracing::info!(
        "Analytics service ready (range limit {} months)",
        config.analytics.max_range_months
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .app_data(query_config())
            .configure(modules::configure)
            .default_service(web::to(not_found))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server terminated with an error")
}
