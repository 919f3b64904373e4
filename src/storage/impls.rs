//! Implementation blocks for storage types.

/// ShardedStore implementation: open, load, get, set, iterate.
pub mod sharded_store;

/// StoreKey implementation: constructors, bucket and path mapping.
pub mod store_key;

/// ValueCodec implementation for the configured encodings.
pub mod storage_encoding;
