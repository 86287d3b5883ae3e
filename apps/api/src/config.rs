use std::time::Duration;

use anyhow::{Context, Result};

/// Simulated processing latency applied before each generation, in milliseconds.
const DEFAULT_GENERATION_DELAY_MS: u64 = 1500;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Artificial delay before composing a post. Zero disables it.
    pub generation_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        let defaults = Config::default();

        Ok(Config {
            port: match std::env::var("PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                Err(_) => defaults.port,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            generation_delay: Duration::from_millis(optional_env_u64(
                "GENERATION_DELAY_MS",
                DEFAULT_GENERATION_DELAY_MS,
            )?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            generation_delay: Duration::from_millis(DEFAULT_GENERATION_DELAY_MS),
        }
    }
}

fn optional_env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Environment variable '{key}' must be a non-negative integer")),
        Err(_) => Ok(default),
    }
}
