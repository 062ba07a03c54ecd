use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use super::{file_storage::FileStorage, memory_storage::MemoryStorage};
use crate::config::{StorageBackend, StorageConfig};

/// Failures of the token slot itself. Distinct from decode failures: a slot
/// error says nothing about the token's content.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("token slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("token slot lock poisoned")]
    Poisoned,
}

/// The TokenStorage trait abstracts the single durable slot holding the
/// bearer token between runs (load, save, clear).
///
/// All operations are synchronous: the slot is local, localStorage-like
/// state, and the session layer relies on writes completing before the
/// call returns.
pub trait TokenStorage: Send + Sync {
    /// Read the slot. An empty or missing slot is `Ok(None)`, not an error.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Write the slot, overwriting any prior value.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Empty the slot. Clearing an already-empty slot is a no-op.
    fn clear(&self) -> Result<(), StorageError>;

    fn is_persistent(&self) -> bool {
        // Default implementation should return always True for real slots.
        // The in-memory slot returns false so callers can warn that a
        // session will not survive a restart.
        true
    }
}

/// Creates a concrete slot implementation based on the StorageConfig.
/// If `storage.enabled = false`, tokens live in memory for this run only.
/// Otherwise, picks the specified backend.
pub fn create_storage(config: &StorageConfig) -> Arc<dyn TokenStorage> {
    let storage: Arc<dyn TokenStorage> = if !config.enabled {
        info!("Token persistence is disabled. Using an in-memory slot.");
        Arc::new(MemoryStorage::new())
    } else {
        match &config.backend {
            Some(StorageBackend::File(file_config)) => {
                info!("Using file token slot at '{}'.", file_config.path);
                Arc::new(FileStorage::new(file_config))
            }
            Some(StorageBackend::Memory) => {
                info!("Using in-memory token slot.");
                Arc::new(MemoryStorage::new())
            }
            None => {
                error!("Token persistence is enabled, but no backend config is provided!");
                std::process::exit(1);
            }
        }
    };

    if !storage.is_persistent() {
        warn!("The token slot is not persistent; the session will not survive a restart.");
    }

    storage
}
