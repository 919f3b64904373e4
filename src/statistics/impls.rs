//! Implementation blocks for statistics types.

/// Advertise payload validation.
pub mod advertise_info;

/// Per-key lock acquisition and eviction.
pub mod lock_table;

/// Match payload validation.
pub mod match_info;

/// Report loading, offering and snapshots.
pub mod report;

/// Ingestion and query operations.
pub mod statistics_manager;
