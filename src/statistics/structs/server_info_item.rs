use serde::{
    Deserialize,
    Serialize
};
use crate::statistics::structs::advertise_info::AdvertiseInfo;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfoItem {
    pub endpoint: String,
    pub info: AdvertiseInfo,
}
