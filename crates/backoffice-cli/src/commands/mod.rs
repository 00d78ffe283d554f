//! CLI command definitions and dispatch.

pub mod account;
pub mod auth;
pub mod product;

use clap::{Parser, Subcommand};

use backoffice_core::config::AppConfig;
use backoffice_core::error::AppError;
use backoffice_state::{AppContext, Operation};

use crate::output::OutputFormat;

/// Backoffice: account and product administration
#[derive(Debug, Parser)]
#[command(name = "backoffice-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login(auth::LoginArgs),
    /// Forget the stored session token
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Account management
    Account(account::AccountArgs),
    /// Product management
    Product(product::ProductArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let ctx = load_context(&self.config)?;
        match &self.command {
            Commands::Login(args) => auth::login(args, &ctx).await,
            Commands::Logout => auth::logout(&ctx).await,
            Commands::Whoami => auth::whoami(&ctx, self.format).await,
            Commands::Account(args) => account::execute(args, &ctx, self.format).await,
            Commands::Product(args) => product::execute(args, &ctx, self.format).await,
        }
    }
}

/// Helper: load configuration and wire services
pub fn load_context(config_path: &str) -> Result<AppContext, AppError> {
    let env = std::env::var("BACKOFFICE_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(config_path, &env)?;
    AppContext::from_config(config)
}

/// Helper: fail early when no session token is stored
pub fn require_token(ctx: &AppContext) -> Result<(), AppError> {
    match ctx.tokens.read()? {
        Some(_) => Ok(()),
        None => Err(AppError::authentication(
            "Not logged in. Run `backoffice-cli login` first.",
        )),
    }
}

/// Helper: rephrase a service error the way the console would show it
pub fn explain(operation: Operation, err: AppError) -> AppError {
    AppError::new(err.kind, operation.describe(&err))
}

/// Helper: interactive text input
pub fn prompt(label: &str, value: &Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(label)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}

/// Helper: interactive password input
pub fn prompt_password(label: &str, value: &Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Password::new()
            .with_prompt(label)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}
