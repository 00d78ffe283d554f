//! Renders the notification queue onto a surface and runs dismissal timers.

use std::collections::HashMap;

use tokio::task::JoinHandle;

use crate::alert::queue::{AlertEntry, AlertId, AlertQueue};
use crate::store::{Action, Store};

/// Where notifications are drawn.
pub trait AlertSurface: Send {
    /// Remove everything currently shown.
    fn clear(&mut self);
    /// Draw one notification.
    fn show(&mut self, entry: &AlertEntry);
}

/// Mirrors the store's alert queue onto an [`AlertSurface`].
///
/// Every change to the queue clears the surface and redraws all entries in
/// order. Each timed entry gets exactly one timer; its expiry removes that
/// entry by id, so earlier removals cannot shift it onto a neighbour.
#[derive(Debug)]
pub struct AlertDisplay<S> {
    store: Store,
    surface: S,
    timers: HashMap<AlertId, JoinHandle<()>>,
    rendered: Option<AlertQueue>,
}

impl<S: AlertSurface> AlertDisplay<S> {
    pub fn new(store: Store, surface: S) -> Self {
        Self {
            store,
            surface,
            timers: HashMap::new(),
            rendered: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of armed dismissal timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Dismiss `id` immediately.
    pub fn dismiss(&mut self, id: AlertId) {
        if let Some(timer) = self.timers.remove(&id) {
            timer.abort();
        }
        self.store.dispatch(Action::RemoveAlert(id));
    }

    /// Redraw `alerts` if they differ from what was last drawn.
    ///
    /// Must be called from within a tokio runtime.
    pub fn render(&mut self, alerts: &AlertQueue) {
        if self.rendered.as_ref() == Some(alerts) {
            return;
        }

        self.timers.retain(|id, timer| {
            let keep = alerts.contains(*id);
            if !keep {
                timer.abort();
            }
            keep
        });

        self.surface.clear();
        for entry in alerts.iter() {
            self.surface.show(entry);
            if let Some(duration) = entry.duration {
                if self.timers.contains_key(&entry.id) {
                    continue;
                }
                let store = self.store.clone();
                let id = entry.id;
                let timer = tokio::spawn(async move {
                    tokio::time::sleep(duration).await;
                    tracing::trace!(%id, "Alert expired");
                    store.dispatch(Action::RemoveAlert(id));
                });
                self.timers.insert(id, timer);
            }
        }

        self.rendered = Some(alerts.clone());
    }

    /// Follow the store until it is dropped.
    pub async fn run(mut self) {
        let mut rx = self.store.subscribe();
        loop {
            let alerts = rx.borrow_and_update().alerts.clone();
            self.render(&alerts);
            if rx.changed().await.is_err() {
                break;
            }
        }
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
    }
}

impl<S: AlertSurface + 'static> AlertDisplay<S> {
    /// Run the display as a background task.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
