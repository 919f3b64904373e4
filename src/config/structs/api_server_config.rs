use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub threads: u64,
    /// Upper bound in bytes for a PUT request body.
    pub max_body_size: usize,
}
