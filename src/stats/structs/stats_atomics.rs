use std::sync::atomic::AtomicI64;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub servers: AtomicI64,
    pub players: AtomicI64,
    pub advertises_accepted: AtomicI64,
    pub advertises_rejected: AtomicI64,
    pub matches_accepted: AtomicI64,
    pub matches_rejected: AtomicI64,
    pub internal_errors: AtomicI64,
    pub api_requests: AtomicI64,
    pub api_not_found: AtomicI64,
}
