//! Implementation blocks for statistics operations.

/// Snapshot and update of the service counters.
pub mod statistics_manager;
