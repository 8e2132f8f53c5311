//! JSON-file storage for native builds, standing in for the browser's
//! `localStorage` on desktop.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use super::DurableStorage;
use super::StorageError;

const APP_DIR: &str = "portfolio";
const FILE_NAME: &str = "prefs.json";

/// Stores every key as a string member of one JSON object.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/portfolio/prefs.json`, e.g. `~/.config/portfolio/prefs.json` on Linux.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = dirs::config_dir().ok_or_else(|| {
            StorageError::Unavailable("no configuration directory on this platform".to_owned())
        })?;
        Ok(Self::open(dir.join(APP_DIR).join(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self, key: &str) -> Result<BTreeMap<String, String>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageError::Read {
                    key: key.to_owned(),
                    reason: e.to_string(),
                })
            }
        };
        serde_json::from_str(&text).map_err(|e| StorageError::Read {
            key: key.to_owned(),
            reason: format!("{}: {e}", self.path.display()),
        })
    }
}

impl DurableStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load(key)?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |reason: String| StorageError::Write {
            key: key.to_owned(),
            reason,
        };

        // A corrupt file is replaced rather than blocking every later write.
        let mut values = self.load(key).unwrap_or_default();
        values.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&values).map_err(|e| write_err(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| write_err(e.to_string()))
    }
}
