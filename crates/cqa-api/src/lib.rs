//! Axum HTTP API server for continuity analysis.
//!
//! This crate provides:
//! - `POST /api/analyze`: real continuity scoring of uploaded frames
//! - `POST /api/demo/analyze`: the dashboard's randomized demo mock
//! - Per-IP rate limiting and security headers
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod upload;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
