//! Configuration management for the Saigon Flood Watch service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SFW_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Forecast provider configuration
    pub forecast: ForecastConfig,

    /// Marine/tide provider configuration
    pub marine: MarineConfig,

    /// Geocoding provider configuration
    pub geocoding: GeocodingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Forecast API base URL
    pub base_url: String,

    /// Timezone passed to the provider for hourly/daily alignment
    pub timezone: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarineConfig {
    /// Marine API base URL
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// Geocoding API base URL
    pub base_url: String,

    /// User-Agent header required by the geocoding provider's usage policy
    pub user_agent: String,

    /// Maximum number of autocomplete suggestions to return
    pub suggestion_limit: u8,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("SFW_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("forecast.base_url", "https://api.open-meteo.com/v1")?
            .set_default("forecast.timezone", "Asia/Ho_Chi_Minh")?
            .set_default("marine.base_url", "https://marine-api.open-meteo.com/v1")?
            .set_default("geocoding.base_url", "https://nominatim.openstreetmap.org")?
            .set_default("geocoding.user_agent", "saigon-flood-watch/0.1")?
            .set_default("geocoding.suggestion_limit", 5)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SFW_ prefix)
            .add_source(
                Environment::with_prefix("SFW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
