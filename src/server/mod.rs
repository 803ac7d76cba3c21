//! HTTP boundary: a small JSON API over the planning pipeline.
//!
//! Catalog and models are loaded once at startup and shared read-only
//! across requests; nothing is reloaded per call.

pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::predictor::TargetModelSet;

/// Read-only resources shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FoodCatalog>,
    pub models: Arc<TargetModelSet>,
}

impl AppState {
    pub fn new(catalog: FoodCatalog, models: TargetModelSet) -> Self {
        Self {
            catalog: Arc::new(catalog),
            models: Arc::new(models),
        }
    }
}

/// Build the application router.
///
/// CORS is wide open; the API serves a static frontend from another
/// origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(routes::calculate))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn run(bind: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!(
        "listening on {} ({} foods in catalog)",
        bind,
        state.catalog.len()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
