//! # backoffice-client
//!
//! Everything that talks to the outside world: the session token store
//! (a cookie-like slot with a TTL), the HTTP transport, and the services
//! wrapping each backend endpoint.

pub mod http;
pub mod services;
pub mod token;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use http::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};
pub use services::{AccountService, ApiClient, AuthService, ProductService};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
