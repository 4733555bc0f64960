//! API error handling
//!
//! Maps handler-level validation failures and the upstream client's
//! classified failures to HTTP status codes. Every failure is terminal per
//! request and surfaces immediately with a human-readable message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_openweather::WeatherError;
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The OpenWeatherMap API key is not configured (500)
    #[error("OPENWEATHER_API_KEY is not configured on the server.")]
    MissingApiKey,

    /// City missing or blank after trimming (400)
    #[error("Missing required field: city.")]
    MissingCity,

    /// Upstream reported the city as unknown (404)
    #[error("City not found.")]
    CityNotFound,

    /// Could not reach the upstream provider (502)
    #[error("Failed to reach OpenWeatherMap.")]
    UpstreamUnreachable,

    /// Upstream answered a non-404 error status (502)
    #[error("OpenWeatherMap returned an error (status {0}).")]
    UpstreamStatus(u16),

    /// Upstream body was not parseable as JSON (502)
    #[error("OpenWeatherMap returned invalid JSON.")]
    UpstreamInvalidJson,

    /// Upstream JSON did not match the expected shape (502)
    #[error("Upstream response format from OpenWeatherMap was unexpected.")]
    UpstreamUnexpectedFormat,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingCity => StatusCode::BAD_REQUEST,
            Self::CityNotFound => StatusCode::NOT_FOUND,
            Self::UpstreamUnreachable
            | Self::UpstreamStatus(_)
            | Self::UpstreamInvalidJson
            | Self::UpstreamUnexpectedFormat => StatusCode::BAD_GATEWAY,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "missing_api_key",
            Self::MissingCity => "missing_city",
            Self::CityNotFound => "city_not_found",
            Self::UpstreamUnreachable => "upstream_unreachable",
            Self::UpstreamStatus(_) => "upstream_error",
            Self::UpstreamInvalidJson => "upstream_invalid_json",
            Self::UpstreamUnexpectedFormat => "upstream_unexpected_format",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::Unreachable(_) => Self::UpstreamUnreachable,
            WeatherError::CityNotFound => Self::CityNotFound,
            WeatherError::UpstreamStatus(status) => Self::UpstreamStatus(status),
            WeatherError::InvalidJson(_) => Self::UpstreamInvalidJson,
            WeatherError::UnexpectedFormat(_) => Self::UpstreamUnexpectedFormat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_names_the_variable() {
        let err = ApiError::MissingApiKey;
        assert!(err.to_string().contains("OPENWEATHER_API_KEY"));
    }

    #[test]
    fn missing_city_names_the_field() {
        let err = ApiError::MissingCity;
        assert!(err.to_string().to_lowercase().contains("city"));
    }

    #[test]
    fn city_not_found_message() {
        let err = ApiError::CityNotFound;
        assert_eq!(err.to_string(), "City not found.");
    }

    #[test]
    fn upstream_status_message_carries_code() {
        let err = ApiError::UpstreamStatus(500);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn unreachable_message_references_provider() {
        let err = ApiError::UpstreamUnreachable;
        assert!(err.to_string().contains("OpenWeatherMap"));
    }

    #[test]
    fn into_response_missing_api_key_is_500() {
        let response = ApiError::MissingApiKey.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn into_response_missing_city_is_400() {
        let response = ApiError::MissingCity.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_city_not_found_is_404() {
        let response = ApiError::CityNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn into_response_upstream_failures_are_502() {
        for err in [
            ApiError::UpstreamUnreachable,
            ApiError::UpstreamStatus(503),
            ApiError::UpstreamInvalidJson,
            ApiError::UpstreamUnexpectedFormat,
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn weather_error_unreachable_converts() {
        let source = WeatherError::Unreachable("connection refused".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::UpstreamUnreachable));
    }

    #[test]
    fn weather_error_city_not_found_converts() {
        let result: ApiError = WeatherError::CityNotFound.into();
        assert!(matches!(result, ApiError::CityNotFound));
    }

    #[test]
    fn weather_error_status_preserves_code() {
        let result: ApiError = WeatherError::UpstreamStatus(503).into();
        assert!(matches!(result, ApiError::UpstreamStatus(503)));
    }

    #[test]
    fn weather_error_invalid_json_converts() {
        let source = WeatherError::InvalidJson("expected value".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::UpstreamInvalidJson));
    }

    #[test]
    fn weather_error_unexpected_format_converts() {
        let source = WeatherError::UnexpectedFormat("missing field: name".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::UpstreamUnexpectedFormat));
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "City not found.".to_string(),
            code: "city_not_found".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("code"));
    }
}
