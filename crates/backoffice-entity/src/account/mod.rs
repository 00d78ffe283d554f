//! Account domain records.

pub mod form;
pub mod model;
pub mod role;
pub mod status;

pub use form::{AccountPatch, NewAccount};
pub use model::Account;
pub use role::Role;
pub use status::AccountStatus;
