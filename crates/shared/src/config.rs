//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// External service configuration.
    pub api: ApiConfig,
    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// External REST service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the reconciliation service, without trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer token obtained from a previous login, if any.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Report configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Currency all amounts are recorded in.
    #[serde(default)]
    pub currency: Currency,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CASHRECON").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
