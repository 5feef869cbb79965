//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use rolegate_auth::account::AccountManager;
use rolegate_auth::pipeline::RequestPipeline;
use rolegate_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Registration, login, and user administration
    pub accounts: Arc<AccountManager>,
    /// Token verification followed by role checks
    pub pipeline: Arc<RequestPipeline>,
}
