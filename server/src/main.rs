//! Barangay Map Backend
//!
//! Serves the visit-logging API and the built frontend. Pin CRUD goes from
//! the frontend straight to the hosted record store; only visit analytics
//! pass through here so the caller IP can be resolved server-side.

mod api;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::{RestVisitStore, VisitStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub visits: Arc<dyn VisitStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Barangay Map Backend");
    tracing::info!("Record store: {}", config.store_url);
    tracing::info!("Static dir: {:?}", config.static_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.store_key.is_empty() {
        tracing::warn!("No store key configured (BMAP_STORE_KEY); visit logging will fail");
    }

    let visits: Arc<dyn VisitStore> = Arc::new(RestVisitStore::new(
        config.store_url.clone(),
        config.store_key.clone(),
    ));

    let state = AppState {
        visits,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/log-visit", post(api::log_visit))
        .route("/visits", get(api::list_visits));

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
