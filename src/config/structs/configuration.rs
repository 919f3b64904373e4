use serde::{Deserialize, Serialize};
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::statistics_config::StatisticsConfig;
use crate::config::structs::storage_config::StorageConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub storage: StorageConfig,
    pub statistics: StatisticsConfig,
    pub api_server: ApiServerConfig,
}
