use serde::{
    Deserialize,
    Serialize
};

/// Entry of the popular servers report, unique per endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PopularServerItem {
    pub endpoint: String,
    pub name: String,
    pub average_matches_per_day: f64,
}
