//! Weather backend HTTP presentation layer
//!
//! Axum surface for the normalized current-weather proxy.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
