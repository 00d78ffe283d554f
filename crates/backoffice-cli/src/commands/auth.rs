//! Session CLI commands.

use clap::Args;

use backoffice_core::error::AppError;
use backoffice_entity::Credentials;
use backoffice_state::session::LOGIN_FAILED_DESCRIPTION;
use backoffice_state::{AccountRow, AppContext, SessionTrigger};

use crate::output::{self, OutputFormat};

/// Arguments for login
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (will prompt if not provided)
    #[arg(short, long)]
    pub username: Option<String>,
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Sign in
pub async fn login(args: &LoginArgs, ctx: &AppContext) -> Result<(), AppError> {
    let username = super::prompt("Username", &args.username)?;
    let password = super::prompt_password("Password", &args.password)?;

    let session = ctx
        .gate
        .run(SessionTrigger::Login(Credentials::new(username, password)))
        .await
        .map_err(|e| AppError::new(e.kind, LOGIN_FAILED_DESCRIPTION))?;

    match session.account() {
        Some(account) => {
            output::print_success(&format!("Logged in as '{}'", account.username));
            Ok(())
        }
        None => Err(AppError::session(
            "Login accepted but the session could not be validated",
        )),
    }
}

/// Sign out
pub async fn logout(ctx: &AppContext) -> Result<(), AppError> {
    ctx.gate.run(SessionTrigger::Logout).await?;
    output::print_success("Logged out");
    Ok(())
}

/// Show the current account
pub async fn whoami(ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    let session = ctx.gate.run(SessionTrigger::Startup).await?;
    let account = session
        .account()
        .ok_or_else(|| AppError::authentication("Not logged in"))?;
    output::print_item(&AccountRow::new(1, account), format);
    Ok(())
}
