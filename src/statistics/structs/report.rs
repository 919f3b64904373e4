use parking_lot::Mutex;
use crate::ranking::structs::ranked_top_list::RankedTopList;
use crate::storage::structs::sharded_store::ShardedStore;

/// A ranked list shared by all entities of one kind, persisted as a single
/// snapshot under `name`.
#[derive(Debug)]
pub struct Report<T> {
    pub name: String,
    pub max_size: usize,
    pub list: Mutex<RankedTopList<T>>,
    pub store: ShardedStore<RankedTopList<T>>,
}
