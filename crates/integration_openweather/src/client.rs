//! OpenWeatherMap current-weather client
//!
//! HTTP client for the OpenWeatherMap Current Weather API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{models::CurrentWeather, normalize::normalize_payload};

/// Weather client errors, one variant per classified failure
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport failure: connection refused, DNS failure, timeout
    #[error("Failed to reach OpenWeatherMap: {0}")]
    Unreachable(String),

    /// Upstream answered 404 for the requested city
    #[error("City not found")]
    CityNotFound,

    /// Upstream answered with a non-404 error status
    #[error("OpenWeatherMap returned an error (status {0})")]
    UpstreamStatus(u16),

    /// Response body was not valid JSON
    #[error("OpenWeatherMap returned invalid JSON: {0}")]
    InvalidJson(String),

    /// JSON parsed but the expected fields were absent or mistyped
    #[error("Unexpected response format from OpenWeatherMap: {0}")]
    UnexpectedFormat(String),
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city by name
    ///
    /// The API key is passed per call so a server without a configured key
    /// can still start and reject requests individually.
    async fn current_by_city(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<CurrentWeather, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Unreachable(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(OpenWeatherConfig::default())
    }

    fn current_weather_url(&self) -> String {
        format!("{}/weather", self.config.base_url)
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self, api_key), fields(city = %city))]
    async fn current_by_city(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<CurrentWeather, WeatherError> {
        let url = self.current_weather_url();
        debug!(url = %url, "Fetching current weather");

        // Single attempt, no retries. The client-level timeout bounds the
        // whole call; exceeding it surfaces as Unreachable.
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| WeatherError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound);
        }
        // Only 404 is special; every other error status folds into one
        // variant carrying the observed code.
        if status.is_client_error() || status.is_server_error() {
            return Err(WeatherError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Unreachable(e.to_string()))?;

        let payload: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| WeatherError::InvalidJson(e.to_string()))?;

        normalize_payload(&payload)
    }
}
