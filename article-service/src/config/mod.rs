use axum::http::HeaderValue;
use serde::Deserialize;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub log_level: String,
    pub mongodb: MongoConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    pub fn origin_header(&self) -> Result<HeaderValue, AppError> {
        HeaderValue::from_str(&self.allowed_origin).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid CORS origin '{}': {}",
                self.allowed_origin,
                e
            ))
        })
    }
}

impl ArticleConfig {
    /// `MONGO_URI` is required; everything else has a default.
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let config = ArticleConfig {
            common: common_config,
            log_level: get_env("LOG_LEVEL", Some("info"))?,
            mongodb: MongoConfig {
                uri: get_env("MONGO_URI", None)?,
                database: get_env("MONGO_DATABASE", Some("articles"))?,
            },
            cors: CorsConfig {
                allowed_origin: get_env("CORS_ALLOWED_ORIGIN", Some("http://localhost:5173"))?,
            },
        };
        config.cors.origin_header()?;

        Ok(config)
    }
}
