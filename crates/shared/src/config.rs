//! Application configuration management.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Finance engine settings.
    #[serde(default)]
    pub finance: FinanceConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
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
    5000
}

/// Settings that shape dashboard and report output.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceConfig {
    /// Share of a positive balance reported as savings on the dashboard.
    #[serde(default = "default_savings_rate")]
    pub savings_rate: Decimal,
    /// Number of transactions listed as recent activity.
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,
    /// Whether the in-memory ledger starts with the demo fixture.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            savings_rate: default_savings_rate(),
            recent_transactions: default_recent_transactions(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

fn default_savings_rate() -> Decimal {
    Decimal::new(30, 2) // 0.30
}

fn default_recent_transactions() -> usize {
    5
}

fn default_seed_demo_data() -> bool {
    true
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones: `config/default`,
    /// `config/{RUN_MODE}`, then `FINTRACK__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Like [`AppConfig::load`], reading `default` and `{RUN_MODE}` files
    /// from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let config = config::Config::builder()
            .add_source(file("default"))
            .add_source(file(&run_mode))
            .add_source(
                config::Environment::with_prefix("FINTRACK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Returns the `host:port` address the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
