use serde::{Deserialize, Serialize};

use crate::adapter::identity::token::DEFAULT_LEEWAY_SECS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub allow_origins: Vec<String>,
    pub address: String,
}

/// Identity provider settings.
///
/// `provider` is either `clerk` (users fetched from the provider API) or
/// `local` (users read from the private claims of the session token).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub provider: String,
    pub jwt_secret: String,
    pub issuer: String,
    pub api_url: String,
    pub secret_key: String,
    /// Clock skew tolerated on `iat`, `nbf` and `exp`.
    #[serde(default = "default_clock_skew_secs")]
    pub clock_skew_secs: u64,
}

fn default_clock_skew_secs() -> u64 {
    DEFAULT_LEEWAY_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    pub limit: i64,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self { limit: 3 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub db: DatabaseConfig,
    pub logger: LoggerConfig,
    pub application: ApplicationConfig,
    pub identity: IdentityConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

impl AppConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<AppConfig> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
