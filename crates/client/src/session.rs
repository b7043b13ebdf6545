//! Durable key/value storage for the login session.
//!
//! Two keys are used: [`KEY_AUTH_TOKEN`] holds the bearer token and
//! [`KEY_USER_DATA`] holds the JSON-encoded [`AuthData`] profile.
//!
//! [`AuthData`]: promo_core::session::AuthData

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const KEY_AUTH_TOKEN: &str = "authToken";
pub const KEY_USER_DATA: &str = "userData";

const SESSION_FILE: &str = "session.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session store I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// String key/value store that survives between console invocations.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// One JSON document (`session.json`) under a directory.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    /// Store inside `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Read the document. An unparseable document reads as empty and the
    /// returned flag is set so the next write replaces it.
    fn load(&self) -> Result<(BTreeMap<String, String>, bool), StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok((BTreeMap::new(), false)),
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => Ok((entries, false)),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "Discarding unreadable session file");
                    Ok((BTreeMap::new(), true))
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok((BTreeMap::new(), false)),
            Err(e) => Err(self.io_err(e)),
        }
    }

    /// Write to a sibling temp file, then rename it over the live document.
    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
        }
        let body = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body).map_err(|e| self.io_err(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let (mut entries, _) = self.load()?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let (mut entries, _) = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let (mut entries, discarded) = self.load()?;
        if entries.remove(key).is_some() || discarded {
            self.save(&entries)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested"));
        assert_eq!(store.get(KEY_AUTH_TOKEN).unwrap(), None);

        store.set(KEY_AUTH_TOKEN, "tok").unwrap();
        store.set(KEY_USER_DATA, "{}").unwrap();

        let reopened = FileSessionStore::new(dir.path().join("nested"));
        assert_eq!(reopened.get(KEY_AUTH_TOKEN).unwrap().as_deref(), Some("tok"));

        reopened.remove(KEY_AUTH_TOKEN).unwrap();
        assert_eq!(store.get(KEY_AUTH_TOKEN).unwrap(), None);
        assert_eq!(store.get(KEY_USER_DATA).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), b"not json").unwrap();
        let store = FileSessionStore::new(dir.path());
        assert_eq!(store.get(KEY_AUTH_TOKEN).unwrap(), None);
    }

    #[test]
    fn truncated_file_is_replaced_on_write_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);

        std::fs::write(&path, br#"{"authToken":"tok"#).unwrap();
        let store = FileSessionStore::new(dir.path());
        store.remove(KEY_AUTH_TOKEN).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<BTreeMap<String, String>>(&body).unwrap(), BTreeMap::new());

        std::fs::write(&path, br#"{"authToken":"tok"#).unwrap();
        store.set(KEY_AUTH_TOKEN, "fresh").unwrap();
        assert_eq!(store.get(KEY_AUTH_TOKEN).unwrap().as_deref(), Some("fresh"));
        assert!(!dir.path().join("session.json.tmp").exists());
    }

    #[test]
    fn memory_store_remove_missing_is_ok() {
        let store = MemorySessionStore::new();
        store.remove(KEY_AUTH_TOKEN).unwrap();
        store.set(KEY_AUTH_TOKEN, "a").unwrap();
        assert_eq!(store.get(KEY_AUTH_TOKEN).unwrap().as_deref(), Some("a"));
    }
}
