//! Rolegate Server: role-based JWT authentication service
//!
//! Main entry point: loads configuration, initializes logging, and serves
//! the API until Ctrl+C.

use tracing_subscriber::{EnvFilter, fmt};

use rolegate_core::config::AppConfig;
use rolegate_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if config.auth.uses_placeholder_secret() {
        tracing::warn!(
            "auth.jwt_secret is the shipped placeholder; set ROLEGATE__AUTH__JWT_SECRET before deploying"
        );
    }

    if let Err(e) = rolegate_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from the config directory and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_dir = std::env::var("ROLEGATE_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("ROLEGATE_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
