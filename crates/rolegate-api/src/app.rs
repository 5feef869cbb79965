//! Application builder: wires auth components, router, and middleware.

use std::sync::Arc;

use axum::Router;

use rolegate_auth::account::AccountManager;
use rolegate_auth::jwt::{TokenIssuer, TokenVerifier};
use rolegate_auth::pipeline::RequestPipeline;
use rolegate_auth::rbac::AccessGate;
use rolegate_auth::store::{CredentialStore, InMemoryCredentialStore};
use rolegate_core::config::AppConfig;
use rolegate_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state over the given credential store.
///
/// Issuer and verifier are built from the same `AuthConfig`; an unusable
/// secret fails here, before the server accepts any request.
pub fn build_state(
    config: AppConfig,
    store: Arc<dyn CredentialStore>,
) -> Result<AppState, AppError> {
    let issuer = Arc::new(TokenIssuer::new(&config.auth)?);
    let verifier = Arc::new(TokenVerifier::new(&config.auth)?);

    let accounts = Arc::new(AccountManager::new(store, issuer, &config.auth));
    let pipeline = Arc::new(RequestPipeline::new(verifier, AccessGate::new()));

    Ok(AppState {
        config: Arc::new(config),
        accounts,
        pipeline,
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Rolegate server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Rolegate server...");

    // ── Step 1: Auth system ──────────────────────────────────────
    let store: Arc<dyn CredentialStore> = Arc::new(InMemoryCredentialStore::new());
    let state = build_state(config.clone(), store)?;
    tracing::info!(
        ttl_hours = config.auth.token_ttl_hours,
        "Token issuer and verifier ready"
    );

    // ── Step 2: Seed accounts ────────────────────────────────────
    state.accounts.seed(&config.users).await?;

    // ── Step 3: Build and start HTTP server ──────────────────────
    let app = build_app(state);
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Rolegate server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Rolegate server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
