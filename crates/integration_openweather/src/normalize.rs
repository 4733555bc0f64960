//! Response normalizer for OpenWeatherMap payloads
//!
//! Projects the provider's native JSON shape into [`CurrentWeather`]. Any
//! absent or mistyped field is classified as
//! [`WeatherError::UnexpectedFormat`].

use serde_json::Value;

use crate::{client::WeatherError, models::CurrentWeather};

fn unexpected(detail: &str) -> WeatherError {
    WeatherError::UnexpectedFormat(detail.to_string())
}

/// Convert an OpenWeatherMap payload to the normalized schema
///
/// Extracts `name`, `main.temp`, `main.humidity` and
/// `weather[0].description`. Humidity accepts any JSON number and truncates
/// toward zero; JSON strings are never coerced to numbers.
pub fn normalize_payload(payload: &Value) -> Result<CurrentWeather, WeatherError> {
    let city = payload
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| unexpected("missing or non-string field: name"))?;

    let main = payload
        .get("main")
        .filter(|v| v.is_object())
        .ok_or_else(|| unexpected("missing or non-object field: main"))?;

    let temperature = main
        .get("temp")
        .and_then(Value::as_f64)
        .ok_or_else(|| unexpected("missing or non-numeric field: main.temp"))?;

    let humidity = main
        .get("humidity")
        .and_then(Value::as_f64)
        .ok_or_else(|| unexpected("missing or non-numeric field: main.humidity"))?;

    // weather is a list of conditions; pick the first
    let description = payload
        .get("weather")
        .and_then(Value::as_array)
        .and_then(|conditions| conditions.first())
        .and_then(|condition| condition.get("description"))
        .and_then(Value::as_str)
        .ok_or_else(|| unexpected("missing or non-string field: weather[0].description"))?;

    #[allow(clippy::cast_possible_truncation)]
    let humidity = humidity.trunc() as i64;

    Ok(CurrentWeather {
        city: city.to_string(),
        temperature,
        humidity,
        description: description.to_string(),
    })
}
