//! Aggregate structures.

/// Running counters of one player.
pub mod player_aggregate;

/// Public statistics of one player.
pub mod player_stats;

/// Running counters of one server.
pub mod server_aggregate;

/// Public statistics of one server.
pub mod server_stats;
