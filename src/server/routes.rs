//! HTTP route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::mood::MAX_INPUT_CHARS;
use crate::types::{AnalyzerInfo, ConfigResponse, HealthResponse, HealthStatus, ServerInfo};

use super::extractors::{Encoding, ResponseFormat};
use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `MessagePack` response wrapper
pub struct MsgPack<T>(pub T);

impl<T: Serialize> IntoResponse for MsgPack<T> {
    fn into_response(self) -> Response {
        match rmp_serde::to_vec_named(&self.0) {
            Ok(bytes) => (
                StatusCode::OK,
                [("content-type", "application/msgpack")],
                bytes,
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize response: {e}"),
            )
                .into_response(),
        }
    }
}

/// A response body encoded the way the client asked for
pub struct Reply<T> {
    encoding: Encoding,
    body: T,
}

impl<T> Reply<T> {
    pub fn new(ResponseFormat(encoding): ResponseFormat, body: T) -> Self {
        Self { encoding, body }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self.encoding {
            Encoding::Json => Json(self.body).into_response(),
            Encoding::MsgPack => MsgPack(self.body).into_response(),
        }
    }
}

/// Health check endpoint
///
/// GET /api/v1/health
pub async fn health(
    State(state): State<AppState>,
    format: ResponseFormat,
) -> Reply<HealthResponse> {
    Reply::new(
        format,
        HealthResponse {
            status: if state.config_fallback {
                HealthStatus::Degraded
            } else {
                HealthStatus::Healthy
            },
            version: VERSION.to_string(),
            moods: state.engine.supported_moods().len(),
            uptime_s: state.uptime_seconds(),
        },
    )
}

/// Configuration endpoint
///
/// GET /api/v1/config
pub async fn config(
    State(state): State<AppState>,
    format: ResponseFormat,
) -> Reply<ConfigResponse> {
    let config = &state.config;

    Reply::new(
        format,
        ConfigResponse {
            server: ServerInfo {
                host: config.server.host.clone(),
                port: config.server.port,
            },
            analyzer: AnalyzerInfo {
                max_request_chars: config.analyzer.max_request_chars,
                max_analyzed_chars: MAX_INPUT_CHARS,
            },
        },
    )
}
