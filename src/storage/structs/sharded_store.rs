//! Durable key-value store sharded over hash buckets.

use std::collections::BTreeMap;
use std::path::PathBuf;
use parking_lot::RwLock;
use crate::config::enums::storage_encoding::StorageEncoding;
use crate::storage::structs::store_key::StoreKey;

/// File backed key-value map with an optional in-memory mirror.
///
/// Values are written through the codec `C` to
/// `base_path/<bucket>/<escaped key>[/Inner/<escaped key2>]`. The bucket is
/// `sha1(primary key) mod bucket_count`, which bounds the number of entries
/// per directory independently of the number of keys.
///
/// # Thread Safety
///
/// All methods take `&self`. The mirror is guarded by a `parking_lot`
/// `RwLock`; file writes use unique temporary names followed by a rename.
/// Concurrent writes to the *same* key must be serialized by the caller,
/// otherwise disk and mirror may end up holding different winners.
#[derive(Debug)]
pub struct ShardedStore<V, C = StorageEncoding> {
    /// Root directory of this store.
    pub base_path: PathBuf,

    /// Number of hash buckets (first directory level).
    pub bucket_count: u64,

    /// Serializer used for every value file.
    pub codec: C,

    /// Whether every entry is mirrored in `entries`.
    pub in_memory: bool,

    /// In-memory mirror, empty for disk-only stores.
    pub entries: RwLock<BTreeMap<StoreKey, V>>,
}
