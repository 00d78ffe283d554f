//! Backoffice Console: interactive administration of accounts and products.
//!
//! Wires configuration, logging, the state store, and the alert display,
//! validates the stored session once, then hands control to the console.

mod console;

use tracing_subscriber::{EnvFilter, fmt};

use backoffice_core::config::AppConfig;
use backoffice_core::error::AppError;
use backoffice_state::{AlertDisplay, AppContext, SessionTrigger};

use console::{Console, ConsoleSurface};

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

    if let Err(e) = run(config).await {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("BACKOFFICE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("BACKOFFICE_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
}

/// Initialize tracing/logging. Output goes to stderr to keep prompts readable.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Main console run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Backoffice Console v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend: {}", config.api.base_url);

    let ctx = AppContext::from_config(config)?;

    let display = AlertDisplay::new(ctx.store.clone(), ConsoleSurface::default()).spawn();

    let session = ctx.gate.run(SessionTrigger::Startup).await?;
    match session.account() {
        Some(account) => tracing::info!("Resumed session for '{}'", account.username),
        None => tracing::info!("No valid session, showing login"),
    }

    let result = Console::new(ctx).run().await;

    display.abort();
    tracing::info!("Backoffice Console stopped");
    result
}
