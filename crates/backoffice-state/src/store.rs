//! The application-state container.
//!
//! State is only ever changed by [`Store::dispatch`], which applies the pure
//! reducer [`AppState::reduce`]. Subscribers hold a `watch` receiver and are
//! woken after every dispatch that changed something.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use backoffice_entity::Account;

use crate::alert::{AlertEntry, AlertId, AlertQueue};
use crate::session::Session;

/// Everything the UI renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current account, or anonymous.
    pub session: Session,
    /// Incremented on every session publish, changed or not.
    pub session_version: u64,
    /// Pending notifications.
    pub alerts: AlertQueue,
}

/// State transition requests.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the current account wholesale (`None` = logged out).
    SetCurrentAccount(Option<Account>),
    /// Append a notification.
    AddAlert(AlertEntry),
    /// Remove the notification with this id, if still pending.
    RemoveAlert(AlertId),
    /// Remove the notification at this position, if in bounds.
    RemoveAlertAt(usize),
}

impl AppState {
    /// Apply `action`. Returns whether subscribers need to be woken.
    pub fn reduce(&mut self, action: Action) -> bool {
        match action {
            Action::SetCurrentAccount(account) => {
                self.session = Session::from(account);
                self.session_version += 1;
                true
            }
            Action::AddAlert(entry) => {
                self.alerts.push(entry);
                true
            }
            Action::RemoveAlert(id) => self.alerts.remove(id).is_some(),
            Action::RemoveAlertAt(index) => self.alerts.remove_at(index).is_some(),
        }
    }
}

/// Shared handle to the application state.
///
/// Cloning is cheap; all clones see the same state.
#[derive(Debug, Clone)]
pub struct Store {
    tx: Arc<watch::Sender<AppState>>,
    next_alert_id: Arc<AtomicU64>,
}

impl Store {
    /// Create a store holding the default (anonymous, no alerts) state.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store holding `state`.
    pub fn with_state(state: AppState) -> Self {
        let (tx, _) = watch::channel(state);
        Self {
            tx: Arc::new(tx),
            next_alert_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }

    /// Apply `action`. Returns whether the state changed.
    pub fn dispatch(&self, action: Action) -> bool {
        debug!(?action, "Dispatching");
        self.tx.send_if_modified(|state| state.reduce(action))
    }

    /// Enqueue a notification. A non-positive `duration_secs` never auto-dismisses.
    pub fn add_alert(
        &self,
        message: impl Into<String>,
        description: impl Into<String>,
        duration_secs: f64,
    ) -> AlertId {
        let id = AlertId(self.next_alert_id.fetch_add(1, Ordering::Relaxed));
        let entry = AlertEntry::new(id, message, description, duration_secs);
        self.dispatch(Action::AddAlert(entry));
        id
    }

    /// Dismiss the notification `id`.
    pub fn dismiss_alert(&self, id: AlertId) -> bool {
        self.dispatch(Action::RemoveAlert(id))
    }

    /// Dismiss the notification at `index` (positional contract).
    pub fn remove_alert_at(&self, index: usize) -> bool {
        self.dispatch(Action::RemoveAlertAt(index))
    }

    /// Whether an account is currently published.
    pub fn is_logged_in(&self) -> bool {
        self.tx.borrow().session.is_authenticated()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
