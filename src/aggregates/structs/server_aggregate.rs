use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};
use crate::aggregates::structs::server_stats::ServerStats;

/// Statistics of one server plus the counters they are derived from.
///
/// Days are counted as "a match arrived on a different day than the previous
/// one", so out of order submissions may open a day twice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ServerAggregate {
    pub stats: ServerStats,
    pub last_match_day: Option<NaiveDate>,
    pub matches_in_last_day: u64,
    pub days_with_matches: u64,
    pub total_population: u64,
    pub map_frequency: BTreeMap<String, u64>,
    pub game_mode_frequency: BTreeMap<String, u64>,
}
