use std::sync::Arc;
use crate::aggregates::structs::player_aggregate::PlayerAggregate;
use crate::aggregates::structs::server_aggregate::ServerAggregate;
use crate::config::structs::configuration::Configuration;
use crate::statistics::structs::advertise_info::AdvertiseInfo;
use crate::statistics::structs::best_player_item::BestPlayerItem;
use crate::statistics::structs::lock_table::LockTable;
use crate::statistics::structs::match_info::MatchInfo;
use crate::statistics::structs::popular_server_item::PopularServerItem;
use crate::statistics::structs::recent_match_item::RecentMatchItem;
use crate::statistics::structs::report::Report;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::structs::sharded_store::ShardedStore;

/// Players need at least this many matches to enter the best players report.
pub const BEST_PLAYERS_MIN_MATCHES: u64 = 10;

/// Owns every store and report of the service.
///
/// Lock order: a server or player lock first, then a report lock. Report
/// locks are never held while taking an entity lock.
#[derive(Debug)]
pub struct StatisticsManager {
    pub config: Arc<Configuration>,
    pub servers: ShardedStore<AdvertiseInfo>,
    pub matches: ShardedStore<MatchInfo>,
    pub server_stats: ShardedStore<ServerAggregate>,
    pub player_stats: ShardedStore<PlayerAggregate>,
    pub recent_matches: Report<RecentMatchItem>,
    pub best_players: Report<BestPlayerItem>,
    pub popular_servers: Report<PopularServerItem>,
    pub server_locks: LockTable,
    pub player_locks: LockTable,
    pub stats: Arc<StatsAtomics>,
}
