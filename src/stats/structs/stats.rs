use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub servers: i64,
    pub players: i64,
    pub advertises_accepted: i64,
    pub advertises_rejected: i64,
    pub matches_accepted: i64,
    pub matches_rejected: i64,
    pub internal_errors: i64,
    pub api_requests: i64,
    pub api_not_found: i64,
}
