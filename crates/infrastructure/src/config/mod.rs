//! Application configuration
//!
//! Three sections, each its own sub-module or reused type:
//! - `server`: HTTP listener settings
//! - `database`: SQLite settings
//! - `classifier`: reuses `ai_core::ClassifierConfig` directly, so a
//!   `[classifier]` block in `config.toml` and `SENTIMETER_CLASSIFIER_*`
//!   environment variables configure the inference client

mod database;
mod server;

use ai_core::ClassifierConfig;
use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// serde default for booleans that start enabled
pub(crate) const fn default_true() -> bool {
    true
}

/// Top-level configuration, one field per section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// SQLite database
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Star-rating classifier client
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    /// Load configuration, later sources winning: baked-in defaults,
    /// then an optional `config.toml`, then `SENTIMETER_*` environment
    /// variables
    ///
    /// The baked-in host is `0.0.0.0` so container deployments work
    /// without a config file; `ServerConfig::default()` stays on
    /// loopback for tests.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("classifier.base_url", "http://localhost:8080")?
            .set_default(
                "classifier.model",
                "nlptown/bert-base-multilingual-uncased-sentiment",
            )?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SENTIMETER")
                    .separator("_")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
