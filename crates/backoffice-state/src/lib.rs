//! # backoffice-state
//!
//! The application-state container and everything that feeds it:
//!
//! * [`store`]: `AppState`, `Action`, and the `Store` exposing
//!   `state()` / `subscribe()` / `dispatch()`.
//! * [`alert`]: the notification queue and the display driver.
//! * [`context`]: wiring of all of the above from configuration.
//! * [`session`]: the session gate that validates the stored token.
//! * [`routes`]: route trees gated by session presence.
//! * [`feedback`] and [`screens`]: table and form logic for accounts and
//!   products, reporting failures through the alert queue.

pub mod alert;
pub mod context;
pub mod feedback;
pub mod routes;
pub mod screens;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use alert::{AlertDisplay, AlertEntry, AlertId, AlertQueue, AlertSurface};
pub use context::AppContext;
pub use feedback::{Feedback, Operation};
pub use routes::{Layout, MenuItem, Route, RouteTree};
pub use screens::{AccountRow, AccountTable, ProductRow, ProductTable};
pub use session::{Session, SessionGate, SessionTrigger};
pub use store::{Action, AppState, Store};
