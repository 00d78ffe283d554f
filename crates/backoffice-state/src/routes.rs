//! Route trees gated by session presence.
//!
//! | session       | tree            | unknown path falls back to |
//! |---------------|-----------------|----------------------------|
//! | authenticated | shell + sidebar | account list               |
//! | anonymous     | bare auth page  | login                      |

use std::fmt;

use crate::session::Session;

/// A screen the console can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Accounts,
    AccountCreate,
    AccountUpdate(String),
    Products,
    ProductCreate,
    ProductUpdate(String),
}

impl Route {
    /// The path that resolves back to this route.
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Accounts => "/account".to_string(),
            Self::AccountCreate => "/account/create".to_string(),
            Self::AccountUpdate(id) => format!("/account/update/{id}"),
            Self::Products => "/product".to_string(),
            Self::ProductCreate => "/product/create".to_string(),
            Self::ProductUpdate(id) => format!("/product/update/{id}"),
        }
    }

    /// The list this route belongs to, used to return after a form.
    pub fn list(&self) -> Self {
        match self {
            Self::Login => Self::Login,
            Self::Accounts | Self::AccountCreate | Self::AccountUpdate(_) => Self::Accounts,
            Self::Products | Self::ProductCreate | Self::ProductUpdate(_) => Self::Products,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Page chrome around a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Management shell with sidebar menu and logout control.
    Shell,
    /// Bare page holding only the alert container.
    Auth,
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub route: Route,
}

/// The set of routes reachable in a session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTree {
    Authenticated,
    Anonymous,
}

impl RouteTree {
    pub fn for_session(session: &Session) -> Self {
        if session.is_authenticated() {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::Authenticated => Layout::Shell,
            Self::Anonymous => Layout::Auth,
        }
    }

    /// Sidebar entries; empty outside the shell.
    pub fn menu(&self) -> Vec<MenuItem> {
        match self {
            Self::Authenticated => vec![
                MenuItem {
                    key: "1",
                    label: "Account",
                    route: Route::Accounts,
                },
                MenuItem {
                    key: "2",
                    label: "Product",
                    route: Route::Products,
                },
            ],
            Self::Anonymous => Vec::new(),
        }
    }

    /// Map `path` to a route within this tree.
    pub fn resolve(&self, path: &str) -> Route {
        if *self == Self::Anonymous {
            return Route::Login;
        }

        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["account"] => Route::Accounts,
            ["account", "create"] => Route::AccountCreate,
            ["account", "update", id] => Route::AccountUpdate((*id).to_string()),
            ["product"] => Route::Products,
            ["product", "create"] => Route::ProductCreate,
            ["product", "update", id] => Route::ProductUpdate((*id).to_string()),
            _ => Route::Accounts,
        }
    }
}
