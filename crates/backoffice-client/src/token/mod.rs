//! Session token storage.

pub mod file;
pub mod memory;

use std::time::Duration;

use backoffice_core::AppResult;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

/// A persistent client-side slot holding the session token.
///
/// The store is responsible for TTL enforcement: once a token has expired,
/// [`read`](TokenStore::read) reports it as absent.
pub trait TokenStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read the current token, if any.
    fn read(&self) -> AppResult<Option<String>>;

    /// Store a token that expires after `ttl`.
    fn write(&self, token: &str, ttl: Duration) -> AppResult<()>;

    /// Remove the token.
    fn clear(&self) -> AppResult<()>;
}
