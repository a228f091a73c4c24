use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
    sync::Mutex,
};

use thiserror::Error;

use crate::theme::ThemePreference;

/// Failure modes of a preference store.
///
/// None of these ever reach the UI: the theme layer logs them and keeps the
/// in-memory preference authoritative for the session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read stored preference: {0}")]
    Read(#[source] io::Error),

    #[error("could not write stored preference: {0}")]
    Write(#[source] io::Error),

    #[error("stored preference is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Key-value persistence for the theme preference.
///
/// `get` distinguishes "nothing stored" (`Ok(None)`) from "stored but
/// unusable" (`Err`); callers treat both as the configured default.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<ThemePreference>, StoreError>;
    fn set(&self, key: &str, value: ThemePreference) -> Result<(), StoreError>;
}

/// A store keeping one JSON file per key inside a directory.
pub struct FsPreferenceStore {
    dir: PathBuf,
}

impl FsPreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store under the user's config directory, namespaced by `app`.
    /// `None` when the platform exposes no config directory.
    pub fn in_config_dir(app: &str) -> Option<Self> {
        Some(Self::new(dirs::config_dir()?.join(app)))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PreferenceStore for FsPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<ThemePreference>, StoreError> {
        let contents = match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Read(err)),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn set(&self, key: &str, value: ThemePreference) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(StoreError::Write)?;

        let contents = serde_json::to_string(&value)?;
        fs::write(self.path_for(key), contents).map_err(StoreError::Write)
    }
}

/// An in-process store. Useful in tests and for hosts without a writable
/// config directory; contents die with the process.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw serialized value, valid or not.
    pub fn insert_raw(&self, key: impl Into<String>, raw: impl Into<String>) {
        self.lock_entries().insert(key.into(), raw.into());
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<ThemePreference>, StoreError> {
        let entries = self.lock_entries();

        let Some(raw) = entries.get(key) else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(raw)?))
    }

    fn set(&self, key: &str, value: ThemePreference) -> Result<(), StoreError> {
        let contents = serde_json::to_string(&value)?;
        self.lock_entries().insert(key.into(), contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(test: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gpui_lumen-{test}-{}", std::process::id()))
    }

    #[test]
    fn test_fs_store_round_trips() {
        let dir = scratch_dir("round-trip");
        let store = FsPreferenceStore::new(&dir);

        store
            .set("lumen-theme", ThemePreference::Light)
            .expect("write should succeed");
        assert_eq!(
            store.get("lumen-theme").expect("read should succeed"),
            Some(ThemePreference::Light)
        );

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_fs_store_missing_key_is_none() {
        let dir = scratch_dir("missing");
        let store = FsPreferenceStore::new(&dir);

        assert_eq!(store.get("lumen-theme").expect("read should succeed"), None);
    }

    #[test]
    fn test_fs_store_persists_as_quoted_token() {
        let dir = scratch_dir("token");
        let store = FsPreferenceStore::new(&dir);

        store
            .set("lumen-theme", ThemePreference::Dark)
            .expect("write should succeed");
        let raw = fs::read_to_string(dir.join("lumen-theme.json")).expect("file should exist");
        assert_eq!(raw, "\"dark\"");

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_fs_store_corrupt_value_is_malformed() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).expect("scratch dir should be creatable");
        fs::write(dir.join("lumen-theme.json"), "not json at all").expect("seed should succeed");

        let store = FsPreferenceStore::new(&dir);
        assert!(matches!(
            store.get("lumen-theme"),
            Err(StoreError::Malformed(_))
        ));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_memory_store_round_trips() {
        let store = MemoryPreferenceStore::new();

        assert_eq!(store.get("lumen-theme").unwrap(), None);
        store.set("lumen-theme", ThemePreference::System).unwrap();
        assert_eq!(
            store.get("lumen-theme").unwrap(),
            Some(ThemePreference::System)
        );
    }

    #[test]
    fn test_memory_store_corrupt_value_is_malformed() {
        let store = MemoryPreferenceStore::new();
        store.insert_raw("lumen-theme", "\"sepia\"");

        assert!(matches!(
            store.get("lumen-theme"),
            Err(StoreError::Malformed(_))
        ));
    }
}
