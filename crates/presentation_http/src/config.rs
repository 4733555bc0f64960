//! Application configuration
//!
//! Loaded once at startup and injected into handler state; handlers never
//! read the process environment directly.

use integration_openweather::OpenWeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Environment variable holding the OpenWeatherMap API key
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all in dev)
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

/// The frontend dev servers; both localhost and 127.0.0.1 to reduce friction
fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            shutdown_timeout_secs: Some(30),
        }
    }
}

/// Weather provider configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherSettings {
    /// Upstream client settings (base URL, timeout)
    #[serde(default)]
    pub client: OpenWeatherConfig,

    /// OpenWeatherMap API key; falls back to `OPENWEATHER_API_KEY`
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherSettings,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Sources, later ones overriding earlier ones: serde defaults, a
    /// `config.toml` next to the binary if present, then environment
    /// variables such as `WEATHER_BACKEND_SERVER__PORT`. The provider key is
    /// finally filled from `OPENWEATHER_API_KEY` when not already set.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("WEATHER_BACKEND")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if config.api_key().is_none() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                if !key.trim().is_empty() {
                    config.weather.api_key = Some(key.into());
                }
            }
        }

        Ok(config)
    }

    /// Configured API key, treating empty and blank values as absent
    pub fn api_key(&self) -> Option<&str> {
        self.weather
            .api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }
}
