//! Statistics data structures.

/// Advertised server description.
pub mod advertise_info;

/// Best players report entry.
pub mod best_player_item;

/// Lazily created per-key locks.
pub mod lock_table;

/// Submitted match result.
pub mod match_info;

/// One scoreboard row.
pub mod player_match_info;

/// Popular servers report entry.
pub mod popular_server_item;

/// Recent matches report entry.
pub mod recent_match_item;

/// Persistent ranked report.
pub mod report;

/// Server listing entry.
pub mod server_info_item;

/// Coordinator owning the stores, reports and locks.
pub mod statistics_manager;
