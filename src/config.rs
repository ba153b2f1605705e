use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the `MOODTUNES_` prefix.
/// For example: `MOODTUNES_SERVER__PORT=8097`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Request limits for the analyzer endpoint
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8097
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Requests with more characters than this are rejected before analysis.
    /// The engine itself only reads the first 5000 characters.
    #[serde(default = "default_max_request_chars")]
    pub max_request_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_request_chars: default_max_request_chars(),
        }
    }
}

fn default_max_request_chars() -> usize {
    10_000
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `MOODTUNES_` and use
    /// double underscores for nested values:
    /// - `MOODTUNES_SERVER__HOST` -> server.host
    /// - `MOODTUNES_SERVER__PORT` -> server.port
    /// - `MOODTUNES_ANALYZER__MAX_REQUEST_CHARS` -> analyzer.max_request_chars
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MOODTUNES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
