//! # rolegate-api
//!
//! HTTP API layer for Rolegate built on Axum.
//!
//! Provides the public, authenticated, and role-gated endpoints, the guard
//! middleware that runs the token pipeline, extractors, DTOs, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
