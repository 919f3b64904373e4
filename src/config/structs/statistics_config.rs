use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatisticsConfig {
    pub max_report_size: u64,
    pub default_report_count: u64,
    pub best_players_min_matches: u64,
    pub top_entries_size: u64,
}
