//! Application configuration module
//!
//! Provides the configuration type shared by the server bootstrap and the
//! credential store. Values are assembled through [`AppConfigBuilder`] and
//! checked with [`AppConfig::validate`].

use thiserror::Error;

/// Default TCP port the server listens on
pub const DEFAULT_PORT: u16 = 3000;

/// Default bcrypt work factor (matches `bcrypt::DEFAULT_COST`)
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Lowest and highest work factors bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port to bind on all interfaces
    pub port: u16,
    /// Fixed bcrypt cost used for every password hash
    pub bcrypt_cost: u32,
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidCost(self.bcrypt_cost));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::MissingValue("log_filter"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
    log_filter: Option<String>,
}

impl AppConfigBuilder {
    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the log filter directive
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            log_filter: self
                .log_filter
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bcrypt cost {0} outside 4..=31")]
    InvalidCost(u32),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: '{1}'")]
    InvalidValue(&'static str, String),
}
