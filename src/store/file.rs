//! JSON-file preference backend.
//!
//! The whole store is one JSON object (`{"key": "text" | number}`). Reads
//! are served from memory; every mutation rewrites the file with the
//! write-to-temp-then-rename pattern so the file on disk is always either
//! the old or the new content.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info, warn};

use super::backend::{PreferenceStore, PreferenceValue};
use crate::{Error, Result};

type Values = BTreeMap<String, PreferenceValue>;

/// [`PreferenceStore`] persisted to a JSON file.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: RwLock<Values>,
}

impl FilePreferences {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or does not
    /// hold a JSON object of strings and numbers. `null` entries are
    /// skipped with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let bytes = fs::read(&path).map_err(|e| Error::storage(&path, e.to_string()))?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                Values::new()
            } else {
                let entries: BTreeMap<String, Option<PreferenceValue>> =
                    serde_json::from_slice(&bytes).map_err(|e| {
                        Error::storage(&path, format!("malformed preferences: {e}"))
                    })?;
                drop_null_entries(&path, entries)
            }
        } else {
            Values::new()
        };

        info!(
            "Opened preference store at {:?} ({} entries)",
            path,
            values.len()
        );

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `mutate` and persists the result while holding the write lock,
    /// so concurrent writers cannot reorder file contents.
    fn update(&self, mutate: impl FnOnce(&mut Values)) {
        let mut values = self
            .values
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        mutate(&mut values);
        if let Err(e) = self.persist(&values) {
            warn!("Failed to persist preferences to {:?}: {}", self.path, e);
        }
    }

    fn persist(&self, values: &Values) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.tmp_path();
        let bytes = serde_json::to_vec_pretty(values)?;
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        debug!("Persisted {} preference entries", values.len());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Entries written as `null` carry no value and are skipped.
fn drop_null_entries(path: &Path, entries: BTreeMap<String, Option<PreferenceValue>>) -> Values {
    entries
        .into_iter()
        .filter_map(|(key, value)| {
            if value.is_none() {
                warn!("Ignoring null preference {:?} in {:?}", key, path);
            }
            value.map(|value| (key, value))
        })
        .collect()
}

impl PreferenceStore for FilePreferences {
    fn set_value(&self, key: &str, value: PreferenceValue) {
        self.update(|values| {
            values.insert(key.to_string(), value);
        });
    }

    fn value(&self, key: &str) -> Option<PreferenceValue> {
        self.values
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn remove_object(&self, key: &str) {
        self.update(|values| {
            values.remove(key);
        });
    }

    fn keys(&self) -> Vec<String> {
        self.values
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferences::open(dir.path().join("prefs.json")).unwrap();
        assert!(store.keys().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        {
            let store = FilePreferences::open(&path).unwrap();
            store.set_value("-serverUrl", "https://wallet.example".into());
            store.set_value("-auth-token-expiration", PreferenceValue::Double(1_800_000_000.5));
        }

        let reopened = FilePreferences::open(&path).unwrap();
        assert_eq!(
            reopened.string("-serverUrl"),
            Some("https://wallet.example".to_string())
        );
        assert_eq!(reopened.double("-auth-token-expiration"), 1_800_000_000.5);
    }

    #[test]
    fn test_remove_is_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let store = FilePreferences::open(&path).unwrap();
        store.set_value("a", "1".into());
        store.set_value("b", "2".into());
        store.remove_object("a");

        let on_disk: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "b": "2" }));
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_empty_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "  \n").unwrap();

        let store = FilePreferences::open(&path).unwrap();
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = FilePreferences::open(&path).unwrap_err();
        assert!(matches!(err, Error::Storage { .. }));
        assert!(err.to_string().contains("malformed preferences"));
    }

    #[test]
    fn test_null_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(
            &path,
            r#"{"-auth-token-expiration": null, "-serverUrl": "https://wallet.example"}"#,
        )
        .unwrap();

        let store = FilePreferences::open(&path).unwrap();
        assert_eq!(store.keys(), vec!["-serverUrl".to_string()]);
        assert_eq!(store.double("-auth-token-expiration"), 0.0);
    }

    #[test]
    fn test_non_finite_number_is_written_as_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let store = FilePreferences::open(&path).unwrap();
        store.set_value("k", PreferenceValue::Double(f64::INFINITY));

        let on_disk: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "k": "inf" }));
    }

    #[test]
    fn test_write_failure_keeps_value_in_memory() {
        let dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be makes every persist fail.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();
        let store = FilePreferences::open(blocker.join("prefs.json")).unwrap();

        store.set_value("k", "v".into());
        assert_eq!(store.string("k"), Some("v".to_string()));
    }
}
