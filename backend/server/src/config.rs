use std::{env, fmt::Display, str::FromStr};

use anyhow::{Result, anyhow};
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "3001";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }

        Ok(Self {
            port: try_load("RUST_PORT", DEFAULT_PORT)?,
            api_base_url: base_url(&try_load::<String>("API_BASE_URL", DEFAULT_API_BASE_URL)?),
        })
    }

    pub fn new(port: u16, api_base_url: &str) -> Self {
        Self {
            port,
            api_base_url: base_url(api_base_url),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            anyhow!("Environment misconfigured: {key} ({e})")
        })
}
