//! Normalized weather data models

use serde::{Deserialize, Serialize};

/// Normalized current-weather record
///
/// A pure projection of the OpenWeatherMap payload. Values are carried
/// through unchanged; metric units are requested upstream, never converted
/// locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// City name as returned by OpenWeatherMap
    pub city: String,
    /// Current temperature in Celsius
    pub temperature: f64,
    /// Current humidity percentage
    pub humidity: i64,
    /// Short weather description (e.g., "clear sky")
    pub description: String,
}
