//! In-process token slot.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

use backoffice_core::{AppError, AppResult};

use super::TokenStore;

/// Token store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `token` for `ttl`.
    pub fn with_token(token: &str, ttl: Duration) -> AppResult<Self> {
        let store = Self::new();
        store.write(token, ttl)?;
        Ok(store)
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> AppResult<Option<String>> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some((_, expires_at)) if *expires_at <= Utc::now() => {
                *slot = None;
                Ok(None)
            }
            Some((token, _)) => Ok(Some(token.clone())),
            None => Ok(None),
        }
    }

    fn write(&self, token: &str, ttl: Duration) -> AppResult<()> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| AppError::session(format!("Invalid token TTL: {e}")))?;
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some((token.to_string(), Utc::now() + ttl));
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_clear() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.read().unwrap(), None);

        store.write("T", Duration::from_secs(60)).unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("T"));

        store.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_expired_token_reads_absent() {
        let store = MemoryTokenStore::with_token("T", Duration::ZERO).unwrap();
        assert_eq!(store.read().unwrap(), None);
    }
}
