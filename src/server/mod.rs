//! HTTP server setup and routing.

mod extractors;
mod mood;
mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::mood::MoodEngine;

pub use extractors::{Encoding, Payload, ResponseFormat};
pub use routes::{MsgPack, Reply};

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Compiled mood engine, read-only after construction
    pub engine: Arc<MoodEngine>,
    /// Set when configuration could not be loaded and defaults are in use
    pub config_fallback: bool,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

impl AppState {
    /// Build state and compile the mood engine
    pub fn new(config: AppConfig) -> crate::Result<Self> {
        Ok(Self::with_engine(config, MoodEngine::new()?))
    }

    pub fn with_engine(config: AppConfig, engine: MoodEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            config_fallback: false,
            started_at: Instant::now(),
        }
    }

    /// Mark the configuration as defaults substituted for a failed load
    pub fn with_config_fallback(mut self) -> Self {
        self.config_fallback = true;
        self
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Mood endpoints
        .route("/mood/analyze", post(mood::analyze_mood))
        .route("/mood/list", get(mood::list_moods))
        .route("/mood/:name", get(mood::get_mood));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
