use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::impls::store_key::{is_hashed_segment, unescape_key, INNER_DIRECTORY, KEY_FILE_SUFFIX};
use crate::storage::structs::sharded_store::ShardedStore;
use crate::storage::structs::store_key::StoreKey;
use crate::storage::traits::value_codec::ValueCodec;

/// Temporary files start with a dot, escaped keys never do.
const TEMP_PREFIX: char = '.';

impl<V, C> ShardedStore<V, C>
where
    V: Serialize + DeserializeOwned + Clone,
    C: ValueCodec,
{
    /// Opens (creating if needed) the store below `base_path`.
    ///
    /// In-memory stores walk the directory tree once and load every value;
    /// disk-only stores skip the walk entirely.
    #[tracing::instrument(level = "debug", skip(base_path, codec))]
    pub fn open<P: AsRef<Path>>(base_path: P, bucket_count: u64, codec: C, in_memory: bool) -> Result<ShardedStore<V, C>, StorageError>
    {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;

        let store = ShardedStore {
            base_path,
            bucket_count: bucket_count.max(1),
            codec,
            in_memory,
            entries: RwLock::new(BTreeMap::new()),
        };

        if in_memory {
            store.load()?;
            info!("[STORAGE] Loaded {} entries from {}", store.len(), store.base_path.display());
        }
        Ok(store)
    }

    fn load(&self) -> Result<(), StorageError>
    {
        let mut entries = BTreeMap::new();
        for bucket_entry in fs::read_dir(&self.base_path)? {
            let bucket_path = bucket_entry?.path();
            if !bucket_path.is_dir() {
                continue;
            }
            for entry in fs::read_dir(&bucket_path)? {
                let path = entry?.path();
                let Some(primary) = self.decode_segment(&path) else { continue };
                if path.is_dir() {
                    let inner_path = path.join(INNER_DIRECTORY);
                    if !inner_path.is_dir() {
                        continue;
                    }
                    for inner_entry in fs::read_dir(&inner_path)? {
                        let inner_file = inner_entry?.path();
                        let Some(secondary) = self.decode_segment(&inner_file) else { continue };
                        self.load_entry(StoreKey::double(&primary, &secondary), &inner_file, &mut entries)?;
                    }
                } else {
                    self.load_entry(StoreKey::single(&primary), &path, &mut entries)?;
                }
            }
        }
        *self.entries.write() = entries;
        Ok(())
    }

    /// Decodes the key of a file or directory name, removing leftovers of
    /// interrupted writes on the way. Key files yield nothing.
    fn decode_segment(&self, path: &Path) -> Option<String>
    {
        let name = path.file_name()?.to_str()?;
        if name.starts_with(TEMP_PREFIX) {
            debug!("[STORAGE] Removing stale temporary file {}", path.display());
            let _ = fs::remove_file(path);
            return None;
        }
        if name.ends_with(KEY_FILE_SUFFIX) {
            return None;
        }
        let key = if is_hashed_segment(name) {
            fs::read(key_file_path(path)).ok().and_then(|data| String::from_utf8(data).ok())
        } else {
            unescape_key(name)
        };
        if key.is_none() {
            warn!("[STORAGE] Skipping entry with undecodable name {}", path.display());
        }
        key
    }

    fn load_entry(&self, key: StoreKey, path: &Path, entries: &mut BTreeMap<StoreKey, V>) -> Result<(), StorageError>
    {
        let Some(value) = self.read_file(path)? else { return Ok(()) };

        // Entries written with another bucket count are moved to their current location.
        let expected = self.entry_path(&key);
        if expected != path {
            info!("[STORAGE] Relocating {} to {}", path.display(), expected.display());
            self.write_entry(&key, &self.codec.encode(&value)?)?;
            fs::remove_file(path)?;
            let _ = fs::remove_file(key_file_path(path));
        }

        entries.insert(key, value);
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<Option<V>, StorageError>
    {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(error) if matches!(error.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory | ErrorKind::NotADirectory) => return Ok(None),
            Err(error) => return Err(StorageError::Io(error)),
        };
        match self.codec.decode(&data) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                warn!("[STORAGE] Discarding corrupted entry {}: {}", path.display(), error);
                let _ = fs::remove_file(path);
                Ok(None)
            }
        }
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), StorageError>
    {
        let parent = path.parent().unwrap_or(self.base_path.as_path());
        fs::create_dir_all(parent)?;

        let temp_path = parent.join(format!("{}{}.tmp", TEMP_PREFIX, Uuid::new_v4().simple()));
        let result = File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(data)?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&temp_path, path));
        if let Err(error) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::Io(error));
        }
        Ok(())
    }

    /// Writes the key files of hashed segments, then the value file.
    fn write_entry(&self, key: &StoreKey, data: &[u8]) -> Result<(), StorageError>
    {
        let primary_path = self.base_path.join(key.primary_path(self.bucket_count));
        let entry_path = self.entry_path(key);
        self.write_key_file(&primary_path, &key.primary)?;
        if let Some(secondary) = &key.secondary {
            self.write_key_file(&entry_path, secondary)?;
        }
        self.write_file(&entry_path, data)
    }

    fn write_key_file(&self, segment_path: &Path, key: &str) -> Result<(), StorageError>
    {
        let hashed = segment_path.file_name().and_then(|name| name.to_str()).is_some_and(is_hashed_segment);
        if !hashed {
            return Ok(());
        }
        let key_path = key_file_path(segment_path);
        if key_path.is_file() {
            return Ok(());
        }
        self.write_file(&key_path, key.as_bytes())
    }

    pub fn entry_path(&self, key: &StoreKey) -> PathBuf
    {
        self.base_path.join(key.relative_path(self.bucket_count))
    }

    pub fn get(&self, key: &str) -> Result<Option<V>, StorageError>
    {
        self.get_key(&StoreKey::single(key))
    }

    pub fn get_double(&self, key1: &str, key2: &str) -> Result<Option<V>, StorageError>
    {
        self.get_key(&StoreKey::double(key1, key2))
    }

    pub fn get_key(&self, key: &StoreKey) -> Result<Option<V>, StorageError>
    {
        if self.in_memory {
            return Ok(self.entries.read().get(key).cloned());
        }
        self.read_file(&self.entry_path(key))
    }

    pub fn set(&self, key: &str, value: &V) -> Result<(), StorageError>
    {
        self.set_key(StoreKey::single(key), value)
    }

    pub fn set_double(&self, key1: &str, key2: &str, value: &V) -> Result<(), StorageError>
    {
        self.set_key(StoreKey::double(key1, key2), value)
    }

    /// Persists `value`, then publishes it to the mirror.
    ///
    /// A primary key holds either one value or a set of secondary keys,
    /// writing the other kind fails with `InvalidKey`. On failure the
    /// previous file and mirror entry stay untouched.
    #[tracing::instrument(level = "debug", skip(self, value))]
    pub fn set_key(&self, key: StoreKey, value: &V) -> Result<(), StorageError>
    {
        if key.primary.is_empty() || key.secondary.as_deref() == Some("") {
            return Err(StorageError::InvalidKey(format!("{}/{}", key.primary, key.secondary.clone().unwrap_or_default())));
        }
        let primary_path = self.base_path.join(key.primary_path(self.bucket_count));
        let conflict = match key.secondary {
            None => primary_path.is_dir(),
            Some(_) => primary_path.is_file(),
        };
        if conflict {
            return Err(StorageError::InvalidKey(format!("{} is already used with the other key kind", key.primary)));
        }
        let data = self.codec.encode(value)?;
        self.write_entry(&key, &data)?;
        if self.in_memory {
            self.entries.write().insert(key, value.clone());
        }
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool
    {
        self.contains_key(&StoreKey::single(key))
    }

    pub fn contains_double(&self, key1: &str, key2: &str) -> bool
    {
        self.contains_key(&StoreKey::double(key1, key2))
    }

    pub fn contains_key(&self, key: &StoreKey) -> bool
    {
        if self.in_memory {
            return self.entries.read().contains_key(key);
        }
        self.entry_path(key).is_file()
    }

    /// Visits every entry in key order. Only available on in-memory stores.
    pub fn for_each<F>(&self, mut callback: F) -> Result<(), StorageError>
    where
        F: FnMut(&StoreKey, &V),
    {
        if !self.in_memory {
            return Err(StorageError::NotInMemory(self.base_path.display().to_string()));
        }
        for (key, value) in self.entries.read().iter() {
            callback(key, value);
        }
        Ok(())
    }

    /// Number of mirrored entries, always zero for disk-only stores.
    pub fn len(&self) -> usize
    {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.read().is_empty()
    }

    pub fn is_in_memory(&self) -> bool
    {
        self.in_memory
    }
}

/// `<segment>.key` next to a hashed segment.
fn key_file_path(segment_path: &Path) -> PathBuf
{
    let mut name = segment_path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(KEY_FILE_SUFFIX);
    segment_path.with_file_name(name)
}
