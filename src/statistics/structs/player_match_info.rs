use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchInfo {
    pub name: String,
    pub frags: u32,
    pub kills: u32,
    pub deaths: u32,
}
