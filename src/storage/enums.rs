//! Storage enumerations.

/// Errors surfaced by the sharded store.
pub mod storage_error;
