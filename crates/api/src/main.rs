//! Binary entrypoint: configuration, pool setup, migrations, and serving.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use stonegate_api::config::ServerConfig;
use stonegate_api::routes;
use stonegate_api::state::AppState;
use stonegate_api::uploads::{HttpImageStore, ImageStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stonegate_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(ServerConfig::from_env());

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = stonegate_db::create_pool(&database_url)
        .await
        .context("failed to connect to database")?;
    stonegate_db::health_check(&pool)
        .await
        .context("database health check failed")?;
    stonegate_db::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    tracing::info!("database ready");

    let image_store: Arc<dyn ImageStore> =
        Arc::new(HttpImageStore::new(config.image_host.clone()));

    let state = AppState {
        pool,
        config: config.clone(),
        image_store,
    };
    let app = routes::app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

/// Resolve on SIGINT or SIGTERM so in-flight requests can drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
