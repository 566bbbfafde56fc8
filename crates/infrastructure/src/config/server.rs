//! HTTP listener settings.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Listener, CORS, and shutdown knobs for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host; loopback unless explicitly opened up
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log output: "json" for structured logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Whether the CORS layer is attached at all
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS origins to allow; empty means allow-all development mode
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Put internal error details into 5xx response bodies; turn off
    /// in production
    #[serde(default = "default_true")]
    pub expose_internal_errors: bool,

    /// Seconds to wait for open connections on shutdown
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Socket address string the listener binds to
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_format: default_log_format(),
            cors_enabled: true,
            allowed_origins: Vec::new(),
            expose_internal_errors: true,
            shutdown_timeout_secs: Some(30),
        }
    }
}
