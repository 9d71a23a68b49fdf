use anyhow::{Context, Result};
use std::env;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub database_max_connections: u32,

    // Rate limiting
    pub rate_per_min: u32,

    pub api_prefix: String,

    // Logging
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8080"),
            database_url: var("DATABASE_URL", "sqlite://hrm.db"),
            database_max_connections: var("DATABASE_MAX_CONNECTIONS", "5")
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive number")?,

            rate_per_min: var("RATE_PER_MIN", "1000")
                .parse()
                .context("RATE_PER_MIN must be a number")?,

            api_prefix: var("API_PREFIX", "/api"),

            log_dir: var("LOG_DIR", "logs"),
            log_level: var("LOG_LEVEL", "debug")
                .parse()
                .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?,
        })
    }
}
