use crate::core::{AppError, Result};
use crate::modules::analytics::services::DEFAULT_MAX_RANGE_MONTHS;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` switches the fmt layer to JSON lines; anything else logs plain text
    pub log_format: String,
}

#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub max_range_months: u32,
}

impl AppConfig {
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_range_months: DEFAULT_MAX_RANGE_MONTHS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            },
            server: ServerConfig::from_env()?,
            analytics: AnalyticsConfig {
                max_range_months: env::var("ANALYTICS_MAX_RANGE_MONTHS")
                    .unwrap_or_else(|_| DEFAULT_MAX_RANGE_MONTHS.to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid ANALYTICS_MAX_RANGE_MONTHS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.analytics.max_range_months == 0 {
            return Err(AppError::Configuration(
                "Analytics range limit must be at least 1 month".to_string(),
            ));
        }

        Ok(())
    }
}
