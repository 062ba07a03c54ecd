use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::storage::file_storage::FileStorageConfig;

/// A wrapper for the token storage configuration:
/// - enabled: if false, the token is never persisted (memory only).
/// - backend: the actual storage backend (file, etc.).
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct StorageConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub backend: Option<StorageBackend>,
}

/// The existing storage backends. We differentiate them via a "type" tag in
/// the YAML.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
#[serde(tag = "type")]
pub enum StorageBackend {
    #[serde(rename = "file")]
    File(FileStorageConfig),

    #[serde(rename = "memory")]
    Memory,
}
