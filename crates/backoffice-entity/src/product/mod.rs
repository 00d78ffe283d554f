//! Product domain records.

pub mod form;
pub mod model;

pub use form::{NewProduct, ProductPatch};
pub use model::Product;
