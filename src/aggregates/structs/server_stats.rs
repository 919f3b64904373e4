use serde::{
    Deserialize,
    Serialize
};
use crate::ranking::structs::ranked_top_list::RankedTopList;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerStats {
    pub total_matches_played: u64,
    pub maximum_matches_per_day: u64,
    pub average_matches_per_day: f64,
    pub maximum_population: u64,
    pub average_population: f64,
    pub top5_game_modes: RankedTopList<String>,
    pub top5_maps: RankedTopList<String>,
}
