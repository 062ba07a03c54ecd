use std::fs;
use std::io;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::base::{StorageError, TokenStorage};

/// The config struct for the file-backed token slot.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone)]
pub struct FileStorageConfig {
    /// Where the token lives on disk, e.g. "~/.cepex/token" already
    /// expanded by whoever writes the config. The parent directory is
    /// created on the first save.
    pub path: String,
}

/// A concrete `TokenStorage` implementation holding the token in a single
/// file. A missing file is an empty slot.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a new `FileStorage` from the given config.
    pub fn new(config: &FileStorageConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
        }
    }
}

impl TokenStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                // Tolerate a trailing newline from hand-edited slots.
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        debug!("Writing token slot at '{}'", self.path.display());
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
