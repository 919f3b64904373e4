use serde::{
    Deserialize,
    Serialize
};

/// Items sorted from best to worst rank.
///
/// Serializes as a plain sequence so snapshots stay readable in JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct RankedTopList<T> {
    pub items: Vec<T>,
}
