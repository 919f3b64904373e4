use serde::{
    Deserialize,
    Serialize
};
use crate::statistics::structs::player_match_info::PlayerMatchInfo;

/// Result of one finished match, scoreboard ordered from first to last place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub map: String,
    pub game_mode: String,
    pub frag_limit: u32,
    pub time_limit: u32,
    pub time_elapsed: f64,
    pub scoreboard: Vec<PlayerMatchInfo>,
}
