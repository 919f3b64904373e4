use std::path::Path;
use log::info;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::enums::storage_encoding::StorageEncoding;
use crate::ranking::structs::ranked_top_list::RankedTopList;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::structs::sharded_store::ShardedStore;
use crate::statistics::structs::report::Report;

impl<T> Report<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Opens the report store below `base_path` and restores the last
    /// snapshot, trimmed to `max_size`.
    pub fn open<P: AsRef<Path>>(base_path: P, name: &str, bucket_count: u64, encoding: StorageEncoding, max_size: usize) -> Result<Report<T>, StorageError>
    {
        let store: ShardedStore<RankedTopList<T>> = ShardedStore::open(base_path.as_ref().join(name), bucket_count, encoding, true)?;
        let mut list = store.get(name)?.unwrap_or_default();
        list.items.truncate(max_size);
        info!("[STATISTICS] Report {} restored with {} entries", name, list.len());
        Ok(Report {
            name: name.to_string(),
            max_size,
            list: Mutex::new(list),
            store,
        })
    }

    /// Offers `item` and persists the new snapshot when the list changed.
    ///
    /// The in-memory list only changes once the snapshot is on disk.
    pub fn offer<R, U, RF, UF>(&self, rank_key: RF, unique_key: UF, item: T) -> Result<bool, StorageError>
    where
        R: PartialOrd,
        U: PartialEq,
        RF: Fn(&T) -> R,
        UF: Fn(&T) -> U,
    {
        let mut list = self.list.lock();
        let mut next = list.clone();
        if !next.update(self.max_size, rank_key, unique_key, item) {
            return Ok(false);
        }
        self.store.set(&self.name, &next)?;
        *list = next;
        Ok(true)
    }

    /// Up to `count` best entries.
    pub fn take(&self, count: usize) -> Vec<T>
    {
        self.list.lock().take(count).to_vec()
    }
}
