//! Notification queue and its display driver.

pub mod display;
pub mod queue;

pub use display::{AlertDisplay, AlertSurface};
pub use queue::{AlertEntry, AlertId, AlertQueue};
