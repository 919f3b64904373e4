use serde::{
    Deserialize,
    Serialize
};
use crate::statistics::structs::match_info::MatchInfo;

/// Entry of the recent matches report, unique per `(server, timestamp)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatchItem {
    pub server: String,
    pub timestamp: String,
    pub results: MatchInfo,
}
