//! Session state - persisted record of the authenticated user
//!
//! A small JSON key-value file, separate from the SQLite store, read once at
//! startup so a logged-in user skips the login flow. The fields are copied by
//! value at login time and carry no referential integrity to the users table,
//! so they can go stale if the row ever changes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::User;

/// Cached attributes of the logged-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}

/// File-backed session store
///
/// Presence of the file means logged-in; `clear` is the logout path.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store at the default path
    /// Priority: MOVIECENTER_SESSION_PATH env var > default app data directory
    pub fn new() -> Result<Self> {
        if let Ok(path) = std::env::var("MOVIECENTER_SESSION_PATH") {
            return Ok(Self {
                path: PathBuf::from(path),
            });
        }

        let dirs = directories::ProjectDirs::from("com", "moviecenter", "MovieCenter")
            .ok_or_else(|| Error::config("Could not determine project directories"))?;

        Ok(Self {
            path: dirs.data_dir().join("session.json"),
        })
    }

    /// Create a store at a specific path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted session, if any
    ///
    /// An absent or unreadable file is simply "not logged in".
    pub fn load(&self) -> Option<Session> {
        let data = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&data) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("Ignoring corrupt session file {}: {}", self.path.display(), err);
                None
            }
        }
    }

    /// True when a session record exists
    pub fn is_logged_in(&self) -> bool {
        self.load().is_some()
    }

    /// Persist the session (called on successful login)
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash never leaves a half-written record
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(session)?)?;
        std::fs::rename(&tmp, &self.path)?;

        log::info!("Saved session for user {}", session.user_id);
        Ok(())
    }

    /// Explicit logout: remove the persisted record
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::at(dir.path().join("session.json"))
    }

    fn sample() -> Session {
        Session {
            user_id: 1,
            email: "jane@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_absent_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.is_logged_in());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&sample()).unwrap();
        assert!(store.is_logged_in());
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_clear_is_logout() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&sample()).unwrap();
        store.clear().unwrap();
        assert!(!store.is_logged_in());

        // Clearing an already-cleared session is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(dir.path().join("session.json"), "{not json").unwrap();
        assert!(store.load().is_none());
    }
}
