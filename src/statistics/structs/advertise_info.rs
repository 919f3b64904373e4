use serde::{
    Deserialize,
    Serialize
};

/// Self description a server sends when it comes online.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiseInfo {
    pub name: String,
    pub game_modes: Vec<String>,
}
