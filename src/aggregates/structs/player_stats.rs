use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub total_matches_played: u64,
    pub total_matches_won: u64,
    pub favorite_server: String,
    pub unique_servers: u64,
    pub favorite_game_mode: String,
    pub average_scoreboard_percent: f64,
    pub maximum_matches_per_day: u64,
    pub average_matches_per_day: f64,
    pub last_match_played: String,
    /// `None` while the player has no recorded death.
    pub kill_to_death_ratio: Option<f64>,
}
