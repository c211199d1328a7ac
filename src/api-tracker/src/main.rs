use anyhow::Context;
use core_tracker::{allowed_origins, get_api_base_url, get_db_pool, get_tls_config, is_tls_enabled, setup_logging};
use data_model_tracker::repository::PgRepository;

use api_tracker::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if it exists
    dotenvy::dotenv().ok();

    setup_logging("api_tracker=debug,tower_http=debug");

    let addr = get_api_base_url().context("Invalid HOST or PORT")?;
    let origins = allowed_origins().context("Invalid CORS_ALLOWED_ORIGINS")?;

    let pool = get_db_pool().await?;
    let app = routes::router(origins).with_state(PgRepository::new(pool).into_shared());

    if is_tls_enabled() {
        rustls::crypto::aws_lc_rs::default_provider()
            .install_default()
            .map_err(|_| anyhow::anyhow!("A rustls crypto provider was already installed"))?;
        let tls_config = get_tls_config().await?;

        tracing::info!("Listening on https://{}", addr);
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .context("HTTPS server failed")?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to address: {}", addr))?;

        tracing::info!("Listening on http://{}", addr);
        axum::serve(listener, app).await.context("HTTP server failed")?;
    }

    Ok(())
}
