use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_COUNTRY_DATA_SOURCE: &str = "https://languagemap.world/resources/countryData.json";

#[derive(Debug, Clone)]
pub struct Config {
    // Data
    pub data_dir: PathBuf,
    pub country_data_source: String,
    pub fetch_timeout_secs: u64,

    // Server
    pub port: u16,
    pub site_origin: String,

    // Formatting
    pub default_locale: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Data
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static/data")),
            country_data_source: std::env::var("COUNTRY_DATA_SOURCE")
                .unwrap_or_else(|_| DEFAULT_COUNTRY_DATA_SOURCE.to_string()),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),

            // Server
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context(format!("PORT must be a port number, got '{}'", v))?,
                Err(_) => 3000,
            },
            site_origin: std::env::var("SITE_ORIGIN")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://www.languagemap.world".to_string()),

            // Formatting
            default_locale: std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en-US".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("static/data"),
            country_data_source: DEFAULT_COUNTRY_DATA_SOURCE.to_string(),
            fetch_timeout_secs: 30,
            port: 3000,
            site_origin: "https://www.languagemap.world".to_string(),
            default_locale: "en-US".to_string(),
        }
    }
}
