use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PROVIDER_URL: &str = "https://vebdizajn-4.onrender.com/api/vebdizajn/frizer";
pub const DEFAULT_STORE_PATH: &str = "appointments.json";

/// Runtime configuration, read once at startup from the environment
/// (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub provider_url: String,
    pub target_year: u16,
    pub bind_addr: String,
    pub port: u16,
    /// `None` disables persistence entirely (in-memory only).
    pub store_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let provider_url =
            env::var("FRIZER_PROVIDER_URL").unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());

        let target_year = match env::var("FRIZER_TARGET_YEAR") {
            Ok(value) => value
                .parse()
                .context("FRIZER_TARGET_YEAR must be a four-digit year")?,
            Err(_) => 2025,
        };

        let bind_addr = env::var("FRIZER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("FRIZER_PORT") {
            Ok(value) => value.parse().context("FRIZER_PORT must be a port number")?,
            Err(_) => 3000,
        };

        // An explicitly empty FRIZER_STORE_PATH selects the ephemeral variant.
        let store_path = match env::var("FRIZER_STORE_PATH") {
            Ok(value) if value.is_empty() => None,
            Ok(value) => Some(PathBuf::from(value)),
            Err(_) => Some(PathBuf::from(DEFAULT_STORE_PATH)),
        };

        Ok(Config {
            provider_url,
            target_year,
            bind_addr,
            port,
            store_path,
        })
    }
}
