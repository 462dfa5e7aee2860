//! Configuration management for the OTD platform client

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Backend base URL, e.g. "http://127.0.0.1:8000"
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Budget for the initial booking-page fetch; on expiry the page
    /// proceeds with an empty result set
    pub initial_fetch_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MediaConfig {
    /// Public base URL of the object storage (R2 bucket); absent means
    /// storage keys cannot be resolved and fall back to the placeholder
    pub base_url: Option<String>,
    /// Path served for missing or unresolvable images
    pub placeholder: String,
    /// Local folder legacy image exports are mapped into
    pub local_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix OTD_)
            .add_source(
                Environment::with_prefix("OTD")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override backend base URL from BACKEND_URL env var if present
            .set_override_option("api.base_url", env::var("BACKEND_URL").ok())?
            // Override media base URL from MEDIA_BASE_URL env var if present
            .set_override_option("media.base_url", env::var("MEDIA_BASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_seconds: 30,
            initial_fetch_timeout_ms: 3000,
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            placeholder: "/placeholder.jpg".to_string(),
            local_prefix: "/rooms".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
