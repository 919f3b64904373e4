//! Durable sharded key-value storage.
//!
//! Every store persists its values as one file per key below a base
//! directory. Keys are spread over a fixed number of hash buckets so that no
//! single directory grows with the total number of keys:
//!
//! ```text
//! <base>/<bucket>/<escaped key>                       single key
//! <base>/<bucket>/<escaped key1>/Inner/<escaped key2>  double key
//! ```
//!
//! The bucket of a double key is derived from its first component only, so
//! all matches of one server share a directory.
//!
//! # Durability
//!
//! Writes go to a temporary file in the target directory, are synced and
//! then renamed over the previous value. A crash leaves either the old or
//! the new value, never a truncated one. Entries that fail to decode are
//! logged, deleted and reported as absent.
//!
//! # Memory mirror
//!
//! Stores opened with `in_memory = true` load every entry at startup and
//! answer reads from memory; they are the only ones that can be iterated.
//! Disk-only stores read the file on every lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use gamestats_actix::config::enums::storage_encoding::StorageEncoding;
//! use gamestats_actix::storage::structs::sharded_store::ShardedStore;
//!
//! let store: ShardedStore<String> = ShardedStore::open("data/Servers", 3000, StorageEncoding::msgpack, true)?;
//! store.set("hostname1-990", &String::from("Server"))?;
//! assert_eq!(store.get("hostname1-990")?, Some(String::from("Server")));
//! ```

/// Storage error enumeration.
pub mod enums;

/// Implementation blocks for the store and its key type.
pub mod impls;

/// Store and key data structures.
pub mod structs;

/// Value serialization seam.
pub mod traits;
