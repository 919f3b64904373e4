use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::{ArcMutexGuard, Mutex, RawMutex};
use crate::statistics::structs::lock_table::LockTable;

pub type KeyGuard = ArcMutexGuard<RawMutex, ()>;

impl LockTable {
    pub fn new() -> LockTable
    {
        LockTable {
            locks: Mutex::new(AHashMap::new()),
        }
    }

    /// Blocks until the lock of `key` is held.
    pub fn acquire(&self, key: &str) -> KeyGuard
    {
        loop {
            let handle = self.locks.lock()
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone();
            let guard = handle.lock_arc();

            // The handle may have been evicted while we were waiting on it.
            let current = self.locks.lock()
                .get(key)
                .is_some_and(|registered| Arc::ptr_eq(registered, &handle));
            if current {
                return guard;
            }
        }
    }

    /// Drops the handle of `key` if `guard` still owns the registered one.
    pub fn evict(&self, key: &str, guard: &KeyGuard)
    {
        let mut locks = self.locks.lock();
        if locks.get(key).is_some_and(|registered| Arc::ptr_eq(registered, ArcMutexGuard::mutex(guard))) {
            locks.remove(key);
        }
    }

    pub fn len(&self) -> usize
    {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.locks.lock().is_empty()
    }
}
