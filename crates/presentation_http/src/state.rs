//! Application state shared across handlers

use std::sync::Arc;

use integration_openweather::WeatherClient;

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Upstream weather client
    pub weather_client: Arc<dyn WeatherClient>,
    /// Application configuration, loaded once at startup
    pub config: Arc<AppConfig>,
}
