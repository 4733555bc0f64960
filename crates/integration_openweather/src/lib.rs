//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap Current Weather API
//! (<https://openweathermap.org/current>). Provides a single normalized
//! current-conditions lookup by city name.

pub mod client;
pub mod models;
pub mod normalize;

pub use client::{OpenWeatherClient, OpenWeatherConfig, WeatherClient, WeatherError};
pub use models::CurrentWeather;
pub use normalize::normalize_payload;
