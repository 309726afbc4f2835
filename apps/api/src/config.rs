use anyhow::{Context, Result};
use std::time::Duration;

/// Application configuration loaded from environment variables.
/// Everything has a default; the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional path to a JSON file replacing the built-in reference tables.
    pub data_path: Option<String>,
    /// Simulated search latency before job matches are returned.
    pub job_search_delay: Duration,
    /// Simulated wearable provisioning time before a device request succeeds.
    pub device_fulfill_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_path: std::env::var("PORTAL_DATA_PATH").ok(),
            job_search_delay: millis_env("JOB_SEARCH_DELAY_MS", 1_500)?,
            device_fulfill_delay: millis_env("DEVICE_FULFILL_DELAY_MS", 2_000)?,
        })
    }
}

fn millis_env(key: &str, default_ms: u64) -> Result<Duration> {
    let ms = match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a millisecond count"))?,
        Err(_) => default_ms,
    };
    Ok(Duration::from_millis(ms))
}
