use anyhow::{Context, Result};
use tracing::info;

use language_map::config::Config;
use language_map::loader;
use language_map::server::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_map=info".parse()?),
        )
        .init();

    info!("Starting language map server");

    let config = Config::from_env()?;

    // Snapshots first, raw source as fallback, empty store as last resort
    let store = loader::load_store(&config).await;
    info!(
        "Serving {} languages and {} countries",
        store.indexes().languages().len(),
        store.indexes().countries().len()
    );

    let port = config.port;
    let app = router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .context(format!("Failed to bind port {}", port))?;
    info!("Listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
