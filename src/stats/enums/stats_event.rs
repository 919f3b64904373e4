//! Statistics event types for tracking service activity.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `StatisticsManager::update_stats()`; the value passed along is
/// added to (or, when negative, subtracted from) the selected counter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Servers,
    Players,
    AdvertisesAccepted,
    AdvertisesRejected,
    MatchesAccepted,
    MatchesRejected,
    InternalErrors,
    ApiRequests,
    ApiNotFound,
}
