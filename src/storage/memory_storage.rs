use std::sync::Mutex;

use super::base::{StorageError, TokenStorage};

/// A `TokenStorage` implementation that holds the token in process memory
/// only. Used when persistence is disabled; every bootstrap starts from an
/// empty slot.
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        *slot = None;
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}
