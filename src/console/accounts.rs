//! Account pages of the management shell.

use tabled::Table;

use backoffice_core::error::AppError;
use backoffice_entity::{AccountPatch, AccountStatus, NewAccount, Role};
use backoffice_state::{AccountRow, Route};

use super::prompt::{self, changed};
use super::{Console, Nav, pick, print_pager};

const LIST_ACTIONS: [&str; 5] = [
    "Next page",
    "Previous page",
    "Create account",
    "Edit account",
    "Toggle status",
];

const ROLE_IDS: [&str; 4] = ["1", "2", "3", "4"];

pub async fn list(console: &mut Console) -> Result<Nav, AppError> {
    if console.stale {
        console.accounts.fetch().await;
        console.stale = false;
    }

    let view = console.accounts.view();
    let page = view.page().page;
    let total_pages = view.total_pages();
    let rows = AccountRow::numbered(view.page().first_row_number(), view.rows());
    let labels: Vec<String> = view
        .rows()
        .iter()
        .map(|a| format!("{} <{}> ({})", a.username, a.email, a.status))
        .collect();
    let ids: Vec<String> = view.rows().iter().map(|a| a.id.clone()).collect();

    println!("Accounts");
    if rows.is_empty() {
        println!("No accounts.");
    } else {
        println!("{}", Table::new(&rows));
    }
    print_pager(page, total_pages, view.total());

    let mut nav = Nav::Stay;
    let Some(action) = console.choose(&LIST_ACTIONS, &mut nav)? else {
        return Ok(nav);
    };

    match action {
        0 if page < total_pages => {
            console.accounts.go_to(page + 1).await;
        }
        1 if page > 1 => {
            console.accounts.go_to(page - 1).await;
        }
        2 => return Ok(Nav::Go(Route::AccountCreate)),
        3 => {
            if let Some(id) = pick(&labels, &ids)? {
                return Ok(Nav::Go(Route::AccountUpdate(id)));
            }
        }
        4 => {
            if let Some(id) = pick(&labels, &ids)? {
                console.accounts.toggle_status(&id).await;
            }
        }
        _ => {}
    }
    Ok(Nav::Stay)
}

pub async fn create(console: &mut Console) -> Result<Nav, AppError> {
    println!("New account");
    let form = NewAccount {
        username: prompt::text("Username", "")?,
        email: prompt::text("Email", "")?,
        password: prompt::password("Password", true)?,
        role_id: pick_role("2")?,
        status: pick_status(AccountStatus::Active)?,
    };

    if console.accounts.create(&form).await {
        return Ok(Nav::Go(Route::Accounts));
    }
    retry_or_back()
}

pub async fn update(console: &mut Console, id: &str) -> Result<Nav, AppError> {
    let Some(account) = console.accounts.load(id).await else {
        return Ok(Nav::Go(Route::Accounts));
    };

    println!("Edit account {}", account.id);
    let username = prompt::text("Username", &account.username)?;
    let email = prompt::text("Email", &account.email)?;
    let password = prompt::password("New password (empty keeps current)", true)?;
    let role_id = pick_role(&account.role_id)?;
    let status = pick_status(account.status)?;

    let patch = AccountPatch {
        username: changed(&account.username, username),
        email: changed(&account.email, email),
        password: (!password.is_empty()).then_some(password),
        status: (status != account.status).then_some(status),
        role_id: changed(&account.role_id, role_id),
    };
    if patch.is_empty() {
        println!("Nothing changed.");
        return Ok(Nav::Go(Route::Accounts));
    }

    if console.accounts.update(&account.id, &patch).await {
        return Ok(Nav::Go(Route::Accounts));
    }
    retry_or_back()
}

fn pick_role(current: &str) -> Result<String, AppError> {
    let labels: Vec<&str> = ROLE_IDS.iter().map(|id| Role::from_id(id).label()).collect();
    let current_index = ROLE_IDS.iter().position(|id| *id == current).unwrap_or(1);
    let index = prompt::select("Role", &labels, current_index)?;
    Ok(ROLE_IDS
        .get(index)
        .map_or_else(|| current.to_string(), |id| (*id).to_string()))
}

fn pick_status(current: AccountStatus) -> Result<AccountStatus, AppError> {
    let options = [current, current.toggled()];
    let index = prompt::select("Status", &options, 0)?;
    Ok(options.get(index).copied().unwrap_or(current))
}

fn retry_or_back() -> Result<Nav, AppError> {
    if prompt::confirm("Try again?")? {
        Ok(Nav::Stay)
    } else {
        Ok(Nav::Go(Route::Accounts))
    }
}
