use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

use crate::app::{default_theme, ThemePreset};
use crate::config::Config;

pub(crate) const HISTORY_KEY: &str = "terminal-history";
pub(crate) const THEME_KEY: &str = "terminal-theme";
pub(crate) const MAX_HISTORY: usize = 100;

#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("create storage dir {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("open storage db {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("storage query: {0}")]
    Query(#[from] rusqlite::Error),
}

/// Best-effort key/value persistence. Implementations never surface failures:
/// a failed read looks like a missing key and a failed write is dropped.
pub(crate) trait Storage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

pub(crate) struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub(crate) fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.pragma_update(None, "journal_mode", "WAL").ok();
        conn.pragma_update(None, "synchronous", "NORMAL").ok();
        Self::init(conn)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
              key TEXT PRIMARY KEY,
              value TEXT NOT NULL,
              updated_at INTEGER NOT NULL DEFAULT (unixepoch())
            );
            ",
        )?;
        Ok(Self { conn })
    }

    fn try_read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn try_write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = unixepoch()",
            params![key, value],
        )?;
        Ok(())
    }
}

impl Storage for SqliteStorage {
    fn read(&self, key: &str) -> Option<String> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("storage read {key} failed: {err}");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = self.try_write(key, value) {
            warn!("storage write {key} failed: {err}");
        }
    }
}

/// Process-local storage, used for `--ephemeral` runs and when the database
/// cannot be opened.
#[derive(Default)]
pub(crate) struct MemoryStorage {
    values: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

pub(crate) fn open_storage(config: &Config) -> Box<dyn Storage> {
    if config.ephemeral {
        debug!("using in-memory storage");
        return Box::new(MemoryStorage::default());
    }
    let path = config.storage_path();
    match SqliteStorage::open(&path) {
        Ok(store) => {
            debug!("opened storage {}", path.display());
            Box::new(store)
        }
        Err(err) => {
            warn!("{err}; falling back to in-memory storage");
            Box::new(MemoryStorage::default())
        }
    }
}

/// Persisted history, oldest first. Missing or corrupt values read as empty.
pub(crate) fn load_history(storage: &dyn Storage) -> Vec<String> {
    let Some(raw) = storage.read(HISTORY_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(mut history) => {
            truncate_history(&mut history);
            history
        }
        Err(err) => {
            warn!("ignoring corrupt {HISTORY_KEY}: {err}");
            Vec::new()
        }
    }
}

pub(crate) fn store_history(storage: &mut dyn Storage, history: &[String]) {
    let start = history.len().saturating_sub(MAX_HISTORY);
    let Ok(serialized) = serde_json::to_string(&history[start..]) else {
        return;
    };
    storage.write(HISTORY_KEY, &serialized);
}

pub(crate) fn truncate_history(history: &mut Vec<String>) {
    if history.len() > MAX_HISTORY {
        history.drain(..history.len() - MAX_HISTORY);
    }
}

pub(crate) fn load_theme(storage: &dyn Storage) -> ThemePreset {
    storage
        .read(THEME_KEY)
        .and_then(|raw| ThemePreset::parse(&raw))
        .unwrap_or_else(default_theme)
}

pub(crate) fn store_theme(storage: &mut dyn Storage, theme: ThemePreset) {
    storage.write(THEME_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_storage_round_trips_and_overwrites() {
        let mut store = SqliteStorage::open_in_memory().expect("open in-memory db");
        assert_eq!(store.read(THEME_KEY), None);

        store.write(THEME_KEY, "amber");
        store.write(THEME_KEY, "matrix");

        assert_eq!(store.read(THEME_KEY).as_deref(), Some("matrix"));
    }

    #[test]
    fn corrupt_history_reads_as_empty() {
        let mut store = MemoryStorage::default();
        store.write(HISTORY_KEY, "{not json");
        assert!(load_history(&store).is_empty());
    }

    #[test]
    fn unknown_theme_reads_as_default() {
        let mut store = MemoryStorage::default();
        store.write(THEME_KEY, "neon");
        assert_eq!(load_theme(&store), ThemePreset::Green);

        store.write(THEME_KEY, "blue");
        assert_eq!(load_theme(&store), ThemePreset::Blue);
    }

    #[test]
    fn stored_history_keeps_most_recent_entries() {
        let mut store = MemoryStorage::default();
        let history: Vec<String> = (0..105).map(|i| format!("cmd{i}")).collect();

        store_history(&mut store, &history);

        let loaded = load_history(&store);
        assert_eq!(loaded.len(), MAX_HISTORY);
        assert_eq!(loaded.first().map(String::as_str), Some("cmd5"));
        assert_eq!(loaded.last().map(String::as_str), Some("cmd104"));
    }

    #[test]
    fn unavailable_database_falls_back_to_memory() {
        let blocker = std::env::temp_dir().join(format!(
            "portfolio-term-blocker-{}",
            std::process::id()
        ));
        fs::write(&blocker, b"not a directory").expect("write blocker file");
        let config = Config {
            data_dir: blocker.clone(),
            ephemeral: false,
            ..Config::default()
        };

        let mut store = open_storage(&config);

        assert!(load_history(store.as_ref()).is_empty());
        assert_eq!(load_theme(store.as_ref()), ThemePreset::Green);
        store_theme(store.as_mut(), ThemePreset::Blue);
        assert_eq!(load_theme(store.as_ref()), ThemePreset::Blue);
        store_history(store.as_mut(), &["about".to_string()]);
        assert_eq!(load_history(store.as_ref()), vec!["about".to_string()]);
        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn open_creates_parent_directory() {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-term-storage-{}",
            std::process::id()
        ));
        let path = dir.join("nested").join("storage.db");
        {
            let mut store = SqliteStorage::open(&path).expect("open file db");
            store_theme(&mut store, ThemePreset::White);
        }
        let store = SqliteStorage::open(&path).expect("reopen file db");
        assert_eq!(load_theme(&store), ThemePreset::White);
        let _ = fs::remove_dir_all(&dir);
    }
}
