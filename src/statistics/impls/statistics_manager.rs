use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use crate::aggregates::structs::player_stats::PlayerStats;
use crate::aggregates::structs::server_stats::ServerStats;
use crate::common::common::{is_valid_endpoint, normalize_key, parse_timestamp};
use crate::config::structs::configuration::Configuration;
use crate::statistics::enums::statistics_error::StatisticsError;
use crate::statistics::structs::advertise_info::AdvertiseInfo;
use crate::statistics::structs::best_player_item::BestPlayerItem;
use crate::statistics::structs::lock_table::LockTable;
use crate::statistics::structs::match_info::MatchInfo;
use crate::statistics::structs::player_match_info::PlayerMatchInfo;
use crate::statistics::structs::popular_server_item::PopularServerItem;
use crate::statistics::structs::recent_match_item::RecentMatchItem;
use crate::statistics::structs::report::Report;
use crate::statistics::structs::server_info_item::ServerInfoItem;
use crate::statistics::structs::statistics_manager::StatisticsManager;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::structs::sharded_store::ShardedStore;

const SERVERS_DIRECTORY: &str = "Servers";
const PLAYERS_DIRECTORY: &str = "Players";
const REPORTS_DIRECTORY: &str = "Reports";

const RECENT_MATCHES_REPORT: &str = "RecentMatches";
const BEST_PLAYERS_REPORT: &str = "BestPlayers";
const POPULAR_SERVERS_REPORT: &str = "PopularServers";

impl StatisticsManager {
    /// Opens every store below `config.storage.path`, loading the in-memory
    /// mirrors and the report snapshots.
    #[tracing::instrument(level = "debug", skip(config))]
    pub fn new(config: Arc<Configuration>) -> Result<StatisticsManager, StatisticsError>
    {
        let storage = &config.storage;
        let base = Path::new(&storage.path);
        let servers_base = base.join(SERVERS_DIRECTORY);
        let reports_base = base.join(REPORTS_DIRECTORY);
        let max_report_size = config.statistics.max_report_size as usize;

        info!("[STATISTICS] Opening storage at {}", base.display());
        let manager = StatisticsManager {
            servers: ShardedStore::open(servers_base.join("Advertise"), storage.bucket_count, storage.encoding, true)?,
            matches: ShardedStore::open(servers_base.join("Match"), storage.bucket_count, storage.encoding, storage.keep_matches_in_memory)?,
            server_stats: ShardedStore::open(servers_base.join("Stats"), storage.bucket_count, storage.encoding, true)?,
            player_stats: ShardedStore::open(base.join(PLAYERS_DIRECTORY).join("Stats"), storage.bucket_count, storage.encoding, true)?,
            recent_matches: Report::open(&reports_base, RECENT_MATCHES_REPORT, storage.bucket_count, storage.encoding, max_report_size)?,
            best_players: Report::open(&reports_base, BEST_PLAYERS_REPORT, storage.bucket_count, storage.encoding, max_report_size)?,
            popular_servers: Report::open(&reports_base, POPULAR_SERVERS_REPORT, storage.bucket_count, storage.encoding, max_report_size)?,
            server_locks: LockTable::new(),
            player_locks: LockTable::new(),
            stats: Arc::new(StatsAtomics::default()),
            config: config.clone(),
        };

        manager.stats.started.store(Utc::now().timestamp(), Ordering::SeqCst);
        manager.update_stats(StatsEvent::Servers, manager.servers.len() as i64);
        manager.update_stats(StatsEvent::Players, manager.player_stats.len() as i64);
        info!("[STATISTICS] Loaded {} servers and {} players", manager.servers.len(), manager.player_stats.len());
        Ok(manager)
    }

    /// Registers or replaces the description of a server.
    ///
    /// Returns `false` for a malformed endpoint or description.
    #[tracing::instrument(level = "debug", skip(self, info))]
    pub fn put_advertise(&self, endpoint: &str, info: &AdvertiseInfo) -> Result<bool, StatisticsError>
    {
        if !is_valid_endpoint(endpoint) || !info.is_valid() {
            self.update_stats(StatsEvent::AdvertisesRejected, 1);
            return Ok(false);
        }

        let key = normalize_key(endpoint);
        let _guard = self.server_locks.acquire(&key);
        let known = self.servers.contains(&key);
        self.servers.set(&key, info)?;
        if !known {
            self.update_stats(StatsEvent::Servers, 1);
        }
        self.update_stats(StatsEvent::AdvertisesAccepted, 1);
        Ok(true)
    }

    /// Accepts the result of a match played on an advertised server.
    ///
    /// Returns `false` when the input is malformed, the server never
    /// advertised, or a match with the same timestamp is already stored.
    /// The match itself is persisted before any statistics, so a replay
    /// after a crash is rejected rather than counted twice. A player whose
    /// update fails does not stop the remaining players; the first failure
    /// is returned once all of them were attempted.
    #[tracing::instrument(level = "debug", skip(self, info))]
    pub fn put_match(&self, endpoint: &str, timestamp: &str, info: &MatchInfo) -> Result<bool, StatisticsError>
    {
        let Some(time) = parse_timestamp(timestamp) else {
            self.update_stats(StatsEvent::MatchesRejected, 1);
            return Ok(false);
        };
        if !is_valid_endpoint(endpoint) || !info.is_valid() {
            self.update_stats(StatsEvent::MatchesRejected, 1);
            return Ok(false);
        }

        let key = normalize_key(endpoint);
        {
            let _guard = self.server_locks.acquire(&key);
            let Some(advertise) = self.servers.get(&key)? else {
                debug!("[STATISTICS] Match from unknown server {}", key);
                self.update_stats(StatsEvent::MatchesRejected, 1);
                return Ok(false);
            };
            if self.matches.contains_double(&key, timestamp) {
                debug!("[STATISTICS] Duplicate match {} at {}", key, timestamp);
                self.update_stats(StatsEvent::MatchesRejected, 1);
                return Ok(false);
            }
            self.matches.set_double(&key, timestamp, info)?;
            self.update_server(&key, &advertise, timestamp, time, info)?;
        }

        let mut failure = None;
        for (index, row) in info.scoreboard.iter().enumerate() {
            if let Err(update_error) = self.update_player(&key, timestamp, time, index + 1, info, row) {
                error!("[STATISTICS] Player {} of match {} at {} not updated: {}", row.name, key, timestamp, update_error);
                failure.get_or_insert(update_error);
            }
        }
        self.update_stats(StatsEvent::MatchesAccepted, 1);
        match failure {
            Some(update_error) => Err(update_error),
            None => Ok(true),
        }
    }

    /// Caller holds the server lock.
    fn update_server(&self, key: &str, advertise: &AdvertiseInfo, timestamp: &str, time: DateTime<Utc>, info: &MatchInfo) -> Result<(), StatisticsError>
    {
        let previous = self.server_stats.get(key)?.unwrap_or_default();
        let next = previous.update(time, info, self.config.statistics.top_entries_size as usize);
        self.server_stats.set(key, &next)?;

        self.recent_matches.offer(
            |item| parse_timestamp(&item.timestamp),
            |item| (item.server.clone(), item.timestamp.clone()),
            RecentMatchItem {
                server: key.to_string(),
                timestamp: timestamp.to_string(),
                results: info.clone(),
            },
        )?;
        self.popular_servers.offer(
            |item| item.average_matches_per_day,
            |item| item.endpoint.clone(),
            PopularServerItem {
                endpoint: key.to_string(),
                name: advertise.name.clone(),
                average_matches_per_day: next.stats.average_matches_per_day,
            },
        )?;
        Ok(())
    }

    fn update_player(&self, endpoint: &str, timestamp: &str, time: DateTime<Utc>, place: usize, info: &MatchInfo, row: &PlayerMatchInfo) -> Result<(), StatisticsError>
    {
        let key = normalize_key(&row.name);
        let _guard = self.player_locks.acquire(&key);
        let previous = self.player_stats.get(&key)?;
        let known = previous.is_some();
        let next = previous.unwrap_or_default().update(endpoint, timestamp, time, place, info, row);
        self.player_stats.set(&key, &next)?;
        if !known {
            self.update_stats(StatsEvent::Players, 1);
        }

        if !next.is_best_player_eligible(self.config.statistics.best_players_min_matches) {
            return Ok(());
        }
        if let Some(ratio) = next.stats.kill_to_death_ratio {
            self.best_players.offer(
                |item| item.kill_to_death_ratio,
                |item| item.name.clone(),
                BestPlayerItem {
                    name: key.clone(),
                    kill_to_death_ratio: ratio,
                },
            )?;
        }
        Ok(())
    }

    pub fn get_advertise(&self, endpoint: &str) -> Result<Option<AdvertiseInfo>, StatisticsError>
    {
        Ok(self.servers.get(&normalize_key(endpoint))?)
    }

    pub fn get_match(&self, endpoint: &str, timestamp: &str) -> Result<Option<MatchInfo>, StatisticsError>
    {
        Ok(self.matches.get_double(&normalize_key(endpoint), timestamp)?)
    }

    /// Every advertised server, ordered by endpoint.
    pub fn list_all_servers(&self) -> Result<Vec<ServerInfoItem>, StatisticsError>
    {
        let mut servers = Vec::with_capacity(self.servers.len());
        self.servers.for_each(|key, info| {
            servers.push(ServerInfoItem {
                endpoint: key.primary.clone(),
                info: info.clone(),
            });
        })?;
        Ok(servers)
    }

    pub fn get_server_stats(&self, endpoint: &str) -> Result<Option<ServerStats>, StatisticsError>
    {
        let key = normalize_key(endpoint);
        let guard = self.server_locks.acquire(&key);
        let stats = self.server_stats.get(&key)?.map(|aggregate| aggregate.stats);
        if stats.is_none() {
            self.server_locks.evict(&key, &guard);
        }
        Ok(stats)
    }

    /// Unknown names drop their lock handle so that lookups of
    /// random names do not grow the lock table.
    pub fn get_player_stats(&self, name: &str) -> Result<Option<PlayerStats>, StatisticsError>
    {
        let key = normalize_key(name);
        let guard = self.player_locks.acquire(&key);
        let stats = self.player_stats.get(&key)?.map(|aggregate| aggregate.stats);
        if stats.is_none() {
            self.player_locks.evict(&key, &guard);
        }
        Ok(stats)
    }

    pub fn get_recent_matches(&self, count: i64) -> Vec<RecentMatchItem>
    {
        self.recent_matches.take(self.clamp_report_count(count))
    }

    pub fn get_best_players(&self, count: i64) -> Vec<BestPlayerItem>
    {
        self.best_players.take(self.clamp_report_count(count))
    }

    pub fn get_popular_servers(&self, count: i64) -> Vec<PopularServerItem>
    {
        self.popular_servers.take(self.clamp_report_count(count))
    }

    /// Report counts are clamped to `[0, max_report_size]`.
    pub fn clamp_report_count(&self, count: i64) -> usize
    {
        count.clamp(0, self.config.statistics.max_report_size as i64) as usize
    }
}
