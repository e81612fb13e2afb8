use article_service::config::ArticleConfig;
use article_service::startup::Application;
use article_service::SERVICE_NAME;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ArticleConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.as_str())
        .unwrap_or("info");
    init_tracing(SERVICE_NAME, log_level);

    let config = config.map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start {}: {}", SERVICE_NAME, e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
