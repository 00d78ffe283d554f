//! Login page of the anonymous tree.

use backoffice_core::error::AppError;
use backoffice_entity::Credentials;
use backoffice_state::{AppContext, Route, SessionTrigger};

use super::{Nav, prompt};

pub async fn page(ctx: &AppContext) -> Result<Nav, AppError> {
    println!();
    println!("Backoffice | Đăng nhập");
    if prompt::select("Action", &["Sign in", "Quit"], 0)? == 1 {
        return Ok(Nav::Quit);
    }

    let username = prompt::text("Username", "")?;
    let password = prompt::password("Password", true)?;

    // A rejected login has already raised its alert.
    match ctx
        .gate
        .run(SessionTrigger::Login(Credentials::new(username, password)))
        .await
    {
        Ok(session) if session.is_authenticated() => Ok(Nav::Go(Route::Accounts)),
        Ok(_) | Err(_) => Ok(Nav::Stay),
    }
}
