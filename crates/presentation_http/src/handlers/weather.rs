//! Weather lookup handlers
//!
//! Two entry points carrying the same logical input: the city arrives either
//! as a query parameter (GET) or as a JSON body field (POST). Both share the
//! same validation and error mapping.

use axum::{
    Json,
    extract::{Query, State},
};
use integration_openweather::CurrentWeather;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// GET query parameters
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    /// City name to look up (e.g., "London")
    pub city: String,
}

/// POST request body
#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    /// City name to look up (e.g., "London")
    pub city: String,
}

/// Get current weather by city (query param variant)
#[instrument(skip(state, params), fields(city = %params.city))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<CurrentWeather>, ApiError> {
    fetch_weather(&state, &params.city).await
}

/// Get current weather by city (JSON body variant)
#[instrument(skip(state, request), fields(city = %request.city))]
pub async fn post_weather(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> Result<Json<CurrentWeather>, ApiError> {
    fetch_weather(&state, &request.city).await
}

/// Shared lookup flow for both transport variants
///
/// A blank city is rejected before the key check, so an empty city yields
/// 400 under any key state while a missing key yields 500 for any valid
/// city.
async fn fetch_weather(state: &AppState, city: &str) -> Result<Json<CurrentWeather>, ApiError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(ApiError::MissingCity);
    }

    let api_key = state.config.api_key().ok_or(ApiError::MissingApiKey)?;

    let weather = state.weather_client.current_by_city(city, api_key).await?;

    Ok(Json(weather))
}
