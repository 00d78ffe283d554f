//! Core type definitions used across the Backoffice workspace.

pub mod pagination;
pub mod response;
pub mod sorting;

pub use pagination::{Page, PageRequest};
pub use response::ApiEnvelope;
pub use sorting::{SortDirection, SortField};
