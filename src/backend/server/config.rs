/**
 * Server Configuration
 *
 * This module loads `AppConfig` from the environment. A `.env` file in the
 * working directory is read first if present.
 *
 * # Variables
 *
 * - `SERVER_PORT` - listening port (default 3000)
 * - `BCRYPT_COST` - bcrypt work factor, 4 to 31 (default 12)
 * - `RUST_LOG` - tracing filter directive (default `info`)
 *
 * A variable that is set but cannot be parsed is a configuration error.
 */

use crate::shared::{AppConfig, ConfigError};

/// Load configuration from `.env` and the process environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenv::dotenv().ok();
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Build configuration from an arbitrary variable lookup
pub fn config_from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = AppConfig::builder();

    if let Some(port) = lookup("SERVER_PORT") {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", port.clone()))?;
        builder = builder.port(port);
    }

    if let Some(cost) = lookup("BCRYPT_COST") {
        let cost = cost
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidValue("BCRYPT_COST", cost.clone()))?;
        builder = builder.bcrypt_cost(cost);
    }

    if let Some(filter) = lookup("RUST_LOG") {
        builder = builder.log_filter(filter);
    }

    builder.build()
}
