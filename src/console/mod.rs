//! Interactive console: route loop, shell menu, and pages.

mod accounts;
mod login;
mod products;
mod prompt;
mod surface;

pub use surface::ConsoleSurface;

use backoffice_core::error::AppError;
use backoffice_state::{
    AccountTable, AppContext, Layout, ProductTable, Route, RouteTree, SessionTrigger,
};

/// What a page asks the loop to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    /// Show this route next.
    Go(Route),
    /// Show the same route again.
    Stay,
    /// Run the logout trigger.
    Logout,
    /// Leave the console.
    Quit,
}

/// Shell entries shared by every authenticated page.
#[derive(Debug, Clone)]
enum ShellAction {
    Page(&'static str),
    Menu(Route, &'static str),
    Dismiss,
    Logout,
    Quit,
}

impl std::fmt::Display for ShellAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(label) => f.write_str(label),
            Self::Menu(_, label) => write!(f, "» {label}"),
            Self::Dismiss => f.write_str("» Dismiss notifications"),
            Self::Logout => f.write_str("» Logout"),
            Self::Quit => f.write_str("» Quit"),
        }
    }
}

/// The interactive front end.
pub struct Console {
    ctx: AppContext,
    location: String,
    accounts: AccountTable,
    products: ProductTable,
    stale: bool,
}

impl Console {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            accounts: ctx.account_table(),
            products: ctx.product_table(),
            ctx,
            location: "/".to_string(),
            stale: true,
        }
    }

    /// Run until the user quits.
    pub async fn run(mut self) -> Result<(), AppError> {
        loop {
            let tree = RouteTree::for_session(&self.ctx.store.state().session);
            let route = tree.resolve(&self.location);
            tracing::debug!("Rendering {} ({:?})", route, tree.layout());

            if tree.layout() == Layout::Shell {
                self.print_header(&tree, &route);
            }

            let nav = match &route {
                Route::Login => login::page(&self.ctx).await?,
                Route::Accounts => accounts::list(&mut self).await?,
                Route::AccountCreate => accounts::create(&mut self).await?,
                Route::AccountUpdate(id) => accounts::update(&mut self, id).await?,
                Route::Products => products::list(&mut self).await?,
                Route::ProductCreate => products::create(&mut self).await?,
                Route::ProductUpdate(id) => products::update(&mut self, id).await?,
            };

            match nav {
                Nav::Go(next) => {
                    if next == next.list() {
                        self.stale = true;
                    }
                    self.location = next.path();
                }
                Nav::Stay => {}
                Nav::Logout => {
                    self.ctx.gate.run(SessionTrigger::Logout).await?;
                    self.location = Route::Login.path();
                    self.stale = true;
                }
                Nav::Quit => return Ok(()),
            }
        }
    }

    fn print_header(&self, tree: &RouteTree, route: &Route) {
        let state = self.ctx.store.state();
        let user = state
            .session
            .account()
            .map(|a| a.username.as_str())
            .unwrap_or_default();
        let menu: Vec<String> = tree
            .menu()
            .iter()
            .map(|item| {
                let marker = if item.route == route.list() { "*" } else { " " };
                format!("[{}]{} {}", item.key, marker, item.label)
            })
            .collect();
        println!();
        println!("Backoffice | {user}  |  {}", menu.join("  "));
        let pending = state.alerts.len();
        if pending > 0 {
            println!("{pending} notification(s) pending");
        }
    }

    /// Ask for one of the page `actions` or a shell action.
    ///
    /// Returns `Ok(Some(index))` for a page action, `Ok(None)` after a shell
    /// action was turned into `nav`.
    fn choose(&self, actions: &[&'static str], nav: &mut Nav) -> Result<Option<usize>, AppError> {
        let tree = RouteTree::for_session(&self.ctx.store.state().session);
        let mut items: Vec<ShellAction> = actions.iter().copied().map(ShellAction::Page).collect();
        items.extend(
            tree.menu()
                .into_iter()
                .map(|item| ShellAction::Menu(item.route, item.label)),
        );
        if !self.ctx.store.state().alerts.is_empty() {
            items.push(ShellAction::Dismiss);
        }
        items.push(ShellAction::Logout);
        items.push(ShellAction::Quit);

        let picked = prompt::select("Action", &items, 0)?;
        *nav = match &items[picked] {
            ShellAction::Page(_) => return Ok(Some(picked)),
            ShellAction::Menu(route, _) => Nav::Go(route.clone()),
            ShellAction::Dismiss => {
                for entry in self.ctx.store.state().alerts.iter() {
                    self.ctx.store.dismiss_alert(entry.id);
                }
                Nav::Stay
            }
            ShellAction::Logout => Nav::Logout,
            ShellAction::Quit => Nav::Quit,
        };
        Ok(None)
    }
}

/// Let the user pick one row by label; returns its id.
fn pick(labels: &[String], ids: &[String]) -> Result<Option<String>, AppError> {
    if ids.is_empty() {
        println!("Nothing to pick on this page.");
        return Ok(None);
    }
    let index = prompt::select("Which one?", labels, 0)?;
    Ok(ids.get(index).cloned())
}

fn print_pager(page: u64, total_pages: u64, total: u64) {
    println!("Page {page}/{total_pages} ({total} total)");
}
