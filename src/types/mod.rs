//! Shared types for the MoodTunes API.
//!
//! These types are used across the application for request/response handling.

pub mod mood;

use serde::{Deserialize, Serialize};

pub use mood::*;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Number of moods the engine can classify
    pub moods: usize,
    #[serde(default)]
    pub uptime_s: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Serving, but on default configuration because loading it failed
    Degraded,
}

/// Configuration response (subset of config safe to expose)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub server: ServerInfo,
    pub analyzer: AnalyzerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerInfo {
    pub max_request_chars: usize,
    /// Characters the engine reads before truncating
    pub max_analyzed_chars: usize,
}
