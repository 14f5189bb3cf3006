use anyhow::Context;

use confero_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    confero_observability::init(config.log_format);

    let services = confero_api::app::services::AppServices::from_config(&config)
        .await
        .context("failed to initialize webinar storage")?;

    let app = confero_api::app::build_app(services, config.jwt_secret.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
