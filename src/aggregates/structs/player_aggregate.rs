use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};
use crate::aggregates::structs::player_stats::PlayerStats;

/// Statistics of one player plus the counters they are derived from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PlayerAggregate {
    pub stats: PlayerStats,
    pub total_scoreboard: f64,
    pub total_kills: u64,
    pub total_deaths: u64,
    pub matches_per_day: BTreeMap<NaiveDate, u64>,
    pub server_frequency: BTreeMap<String, u64>,
    pub game_mode_frequency: BTreeMap<String, u64>,
}
