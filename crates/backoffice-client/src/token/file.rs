//! Cookie file on disk.
//!
//! The file holds a single JSON cookie `{ name, value, expires_at }`. A
//! missing, expired, foreign, or unreadable cookie reads as "no token".

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use backoffice_core::config::SessionConfig;
use backoffice_core::{AppError, AppResult};

use super::TokenStore;

#[derive(Debug, Serialize, Deserialize)]
struct StoredCookie {
    name: String,
    value: String,
    expires_at: DateTime<Utc>,
}

/// Token store persisted as a cookie file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    cookie_name: String,
}

impl FileTokenStore {
    /// Create a store backed by `path`, holding the cookie `cookie_name`.
    pub fn new(path: impl Into<PathBuf>, cookie_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cookie_name: cookie_name.into(),
        }
    }

    /// Create a store from the session configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.token_file, &config.cookie_name)
    }

    /// Path of the cookie file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn remove_file(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                backoffice_core::error::ErrorKind::Storage,
                format!("Failed to remove cookie file {}", self.path.display()),
                e,
            )),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn read(&self) -> AppResult<Option<String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let cookie: StoredCookie = match serde_json::from_str(&raw) {
            Ok(cookie) => cookie,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable cookie file");
                return Ok(None);
            }
        };

        if cookie.name != self.cookie_name {
            return Ok(None);
        }

        if cookie.expires_at <= Utc::now() {
            debug!(path = %self.path.display(), "Session cookie expired");
            self.remove_file()?;
            return Ok(None);
        }

        Ok(Some(cookie.value).filter(|v| !v.is_empty()))
    }

    fn write(&self, token: &str, ttl: Duration) -> AppResult<()> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| AppError::session(format!("Invalid token TTL: {e}")))?;
        let cookie = StoredCookie {
            name: self.cookie_name.clone(),
            value: token.to_string(),
            expires_at: Utc::now() + ttl,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec(&cookie)?)?;
        debug!(
            path = %self.path.display(),
            expires_at = %cookie.expires_at,
            "Session cookie written"
        );
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.remove_file()
    }
}
