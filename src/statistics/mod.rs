//! Match ingestion and statistics queries.
//!
//! [`StatisticsManager`](structs::statistics_manager::StatisticsManager) is
//! the single entry point used by the HTTP layer. It owns:
//!
//! - the sharded stores for advertisements, raw matches, server aggregates
//!   and player aggregates,
//! - the three persistent reports (recent matches, best players, popular
//!   servers),
//! - one lock table for servers and one for players.
//!
//! # Ingestion
//!
//! A match is accepted under the lock of its server: the raw match is stored
//! first, then the server aggregate, recent matches and popular servers are
//! updated. The server lock is released before the scoreboard is walked;
//! every row then updates its player under that player's lock and, once the
//! player qualifies, the best players report.
//!
//! # Locking
//!
//! Entity locks are always taken before report locks. Only one entity lock
//! is held at a time, so concurrent matches on different servers and players
//! never wait on each other except for the short report updates.
//!
//! # Example
//!
//! ```rust,ignore
//! let manager = StatisticsManager::new(Arc::new(Configuration::init()))?;
//! manager.put_advertise("srv-1", &advertise)?;
//! assert!(manager.put_match("srv-1", "2017-01-22T15:17:00Z", &match_info)?);
//! let top = manager.get_best_players(5);
//! ```

/// Statistics error enumeration.
pub mod enums;

/// Implementation blocks for the coordinator and its helpers.
pub mod impls;

/// Data model, lock table, report and coordinator structures.
pub mod structs;
