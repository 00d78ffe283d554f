//! # backoffice-entity
//!
//! Records exchanged with the admin backend: accounts, products, login
//! credentials, and the validated form payloads used to create or patch them.

pub mod account;
pub mod credentials;
pub mod de;
pub mod product;
pub mod validation;

pub use account::{Account, AccountPatch, AccountStatus, NewAccount, Role};
pub use credentials::Credentials;
pub use product::{NewProduct, Product, ProductPatch};
pub use validation::validate_form;
