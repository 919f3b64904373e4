use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::Mutex;

/// One mutex per entity key, created on first use.
///
/// Handles may be evicted while other threads still wait on them; a waiter
/// that wakes up on an evicted handle retries with the current one.
#[derive(Debug, Default)]
pub struct LockTable {
    pub locks: Mutex<AHashMap<String, Arc<Mutex<()>>>>,
}
