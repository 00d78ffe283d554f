//! Session gate: validates the stored token and publishes the result.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::{debug, info, warn};

use backoffice_client::{AuthService, TokenStore};
use backoffice_core::AppResult;
use backoffice_core::config::{AlertConfig, SessionConfig};
use backoffice_entity::{Account, Credentials};

use super::Session;
use crate::store::{Action, Store};

/// Title of the alert raised when a login is rejected.
pub const LOGIN_FAILED_MESSAGE: &str = "Thất bại";
/// Body of the alert raised when a login is rejected.
pub const LOGIN_FAILED_DESCRIPTION: &str = "Đăng nhập thất bại";

/// Events that re-evaluate the session.
#[derive(Debug, Clone)]
pub enum SessionTrigger {
    /// Application start.
    Startup,
    /// The user submitted the login form.
    Login(Credentials),
    /// The user pressed the logout control.
    Logout,
}

/// Owns the transition between anonymous and authenticated.
///
/// Overlapping refreshes resolve as latest-started wins: each one takes a
/// ticket, and a refresh whose ticket is no longer current when its lookup
/// returns publishes nothing.
#[derive(Debug, Clone)]
pub struct SessionGate {
    store: Store,
    auth: AuthService,
    tokens: Arc<dyn TokenStore>,
    token_ttl: Duration,
    alert_duration: f64,
    generation: Arc<AtomicU64>,
}

impl SessionGate {
    pub fn new(
        store: Store,
        auth: AuthService,
        tokens: Arc<dyn TokenStore>,
        session: &SessionConfig,
        alerts: &AlertConfig,
    ) -> Self {
        Self {
            store,
            auth,
            tokens,
            token_ttl: Duration::from_secs(session.ttl_seconds),
            alert_duration: alerts.default_duration_seconds,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Handle one lifecycle event.
    pub async fn run(&self, trigger: SessionTrigger) -> AppResult<Session> {
        match trigger {
            SessionTrigger::Startup => Ok(self.refresh().await),
            SessionTrigger::Login(credentials) => self.login(&credentials).await,
            SessionTrigger::Logout => Ok(self.logout()),
        }
    }

    /// Re-validate the stored token and publish the outcome.
    ///
    /// Never fails: every problem collapses to [`Session::Anonymous`].
    pub async fn refresh(&self) -> Session {
        let ticket = self.next_ticket();
        let account = self.resolve().await;
        self.publish(ticket, account)
    }

    /// Exchange credentials for a token, store it, and refresh.
    ///
    /// A rejected or failed login raises one alert and stores nothing.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<Session> {
        let token = match self.acquire_token(credentials).await {
            Ok(token) => token,
            Err(e) => {
                warn!(username = %credentials.username, error = %e, "Login failed");
                self.store.add_alert(
                    LOGIN_FAILED_MESSAGE,
                    LOGIN_FAILED_DESCRIPTION,
                    self.alert_duration,
                );
                return Err(e);
            }
        };
        // The token was just written; look it up without re-reading it.
        let ticket = self.next_ticket();
        let account = self.lookup(&token).await;
        Ok(self.publish(ticket, account))
    }

    /// Forget the token and publish anonymous.
    pub fn logout(&self) -> Session {
        self.next_ticket();
        if let Err(e) = self.tokens.clear() {
            warn!(error = %e, "Failed to clear session token");
        }
        info!("Logged out");
        self.store.dispatch(Action::SetCurrentAccount(None));
        Session::Anonymous
    }

    async fn acquire_token(&self, credentials: &Credentials) -> AppResult<String> {
        let token = self.auth.login(credentials).await?;
        self.tokens.write(&token, self.token_ttl)?;
        Ok(token)
    }

    fn publish(&self, ticket: u64, account: Option<Account>) -> Session {
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "Session refresh superseded, discarding result");
            return self.store.state().session;
        }
        let session = Session::from(account.clone());
        self.store.dispatch(Action::SetCurrentAccount(account));
        session
    }

    fn next_ticket(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn resolve(&self) -> Option<Account> {
        let token = match self.tokens.read() {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("No session token stored");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read session token");
                return None;
            }
        };
        self.lookup(&token).await
    }

    async fn lookup(&self, token: &str) -> Option<Account> {
        match self.auth.information(token).await {
            Ok(account) => {
                debug!(account_id = %account.id, "Session validated");
                Some(account)
            }
            Err(e) if e.is_transport() => {
                warn!(error = %e, "Session lookup failed");
                None
            }
            Err(e) => {
                info!(error = %e, "Session token rejected");
                None
            }
        }
    }
}
