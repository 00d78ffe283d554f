//! # backoffice-core
//!
//! Core crate for the Backoffice admin console. Contains configuration
//! schemas, paging/sorting types, the backend response envelope, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Backoffice crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
