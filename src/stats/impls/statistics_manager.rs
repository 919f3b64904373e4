use std::sync::atomic::{AtomicI64, Ordering};
use crate::statistics::structs::statistics_manager::StatisticsManager;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl StatisticsManager {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            servers: self.stats.servers.load(Ordering::SeqCst),
            players: self.stats.players.load(Ordering::SeqCst),
            advertises_accepted: self.stats.advertises_accepted.load(Ordering::SeqCst),
            advertises_rejected: self.stats.advertises_rejected.load(Ordering::SeqCst),
            matches_accepted: self.stats.matches_accepted.load(Ordering::SeqCst),
            matches_rejected: self.stats.matches_rejected.load(Ordering::SeqCst),
            internal_errors: self.stats.internal_errors.load(Ordering::SeqCst),
            api_requests: self.stats.api_requests.load(Ordering::SeqCst),
            api_not_found: self.stats.api_not_found.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter: &AtomicI64 = match event {
            StatsEvent::Servers => &self.stats.servers,
            StatsEvent::Players => &self.stats.players,
            StatsEvent::AdvertisesAccepted => &self.stats.advertises_accepted,
            StatsEvent::AdvertisesRejected => &self.stats.advertises_rejected,
            StatsEvent::MatchesAccepted => &self.stats.matches_accepted,
            StatsEvent::MatchesRejected => &self.stats.matches_rejected,
            StatsEvent::InternalErrors => &self.stats.internal_errors,
            StatsEvent::ApiRequests => &self.stats.api_requests,
            StatsEvent::ApiNotFound => &self.stats.api_not_found,
        };
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }
}
