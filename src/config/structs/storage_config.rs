use serde::{Deserialize, Serialize};
use crate::config::enums::storage_encoding::StorageEncoding;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StorageConfig {
    /// Base directory, every store lives in its own subdirectory below it.
    pub path: String,
    pub bucket_count: u64,
    pub encoding: StorageEncoding,
    /// Raw match bodies are read from disk on demand unless this is set.
    pub keep_matches_in_memory: bool,
}
