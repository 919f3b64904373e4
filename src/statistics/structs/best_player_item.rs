use serde::{
    Deserialize,
    Serialize
};

/// Entry of the best players report, unique per player name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestPlayerItem {
    pub name: String,
    pub kill_to_death_ratio: f64,
}
