//! # Durable Local Key-Value Storage
//!
//! The client persists three things between launches: the auth token, the
//! serialized user snapshot, and the selected UI language. Reads and writes
//! are synchronous and treated as instantaneous; the only guarantee is last
//! write wins.
//!
//! [`FileStore`] keeps the map in a JSON file next to the application (the
//! same shape as the app's theme config file). [`MemoryStore`] backs tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

/// Storage key for the opaque bearer token.
pub const TOKEN_KEY: &str = "orecoin-token";
/// Storage key for the serialized [`shared::User`] snapshot.
pub const USER_KEY: &str = "orecoin-user";
/// Storage key for the selected UI language code (`"ar"` or `"en"`).
pub const LANGUAGE_KEY: &str = "orecoin-language";

/// String-to-string persistent storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Volatile store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// JSON-file-backed store.
///
/// The full map is rewritten on every mutation. A missing or unreadable file
/// opens as empty; write failures are logged and otherwise ignored, matching
/// the best-effort contract of browser local storage.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing entries.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "corrupt store file, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        let json = match serde_json::to_string_pretty(entries) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize store");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, json) {
            tracing::error!(path = %self.path.display(), error = %err, "failed to write store");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}
