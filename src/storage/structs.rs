//! Storage data structures.

/// Durable key-value store sharded over hash buckets.
pub mod sharded_store;

/// Single or double string key.
pub mod store_key;
