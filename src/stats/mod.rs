//! Service counters.
//!
//! Atomic counters describing what the service has done since it started:
//! accepted and rejected submissions, internal failures and API traffic,
//! plus gauges for the number of known servers and players.
//!
//! # Thread Safety
//!
//! All counters are atomic integers and are updated without locking from
//! any worker thread.
//!
//! # Example
//!
//! ```rust,ignore
//! use gamestats_actix::stats::enums::stats_event::StatsEvent;
//!
//! manager.update_stats(StatsEvent::MatchesAccepted, 1);
//! let stats = manager.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
