use axum::{http::StatusCode, response::IntoResponse, routing::any, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod airports;
mod config;
mod models;
mod storage;
mod store;

use config::ServiceConfig;
use storage::{ObjectStore, S3ObjectStore};
use store::AirportStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<AirportStore>,
    object_store: Arc<dyn ObjectStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airports_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env()?;
    info!(
        "Using bucket {} in {} (images served from {})",
        config.bucket, config.region, config.public_base_url
    );

    let store = Arc::new(AirportStore::seeded()?);
    let object_store = Arc::new(S3ObjectStore::new(&config).await);

    let state = AppState {
        store,
        object_store,
    };

    let app = router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn router(state: AppState, config: &ServiceConfig) -> Router {
    Router::new()
        .route("/", any(health))
        .merge(airports::routes(config))
        .fallback(health)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `/` and every unmatched path
async fn health() -> impl IntoResponse {
    (StatusCode::OK, "Status: OK")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
