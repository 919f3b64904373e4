use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use crate::aggregates::structs::player_aggregate::PlayerAggregate;
use crate::common::common::parse_timestamp;
use crate::statistics::structs::match_info::MatchInfo;
use crate::statistics::structs::player_match_info::PlayerMatchInfo;

impl PlayerAggregate {
    /// Snapshot after the player finished at 1-based `place` of `info`,
    /// played on `endpoint` at `timestamp` (parsed as `time`).
    pub fn update(&self, endpoint: &str, timestamp: &str, time: DateTime<Utc>, place: usize, info: &MatchInfo, row: &PlayerMatchInfo) -> PlayerAggregate
    {
        let mut next = self.clone();
        let total_players = info.scoreboard.len().max(1);
        let scoreboard_percent = if total_players == 1 {
            100.0
        } else {
            total_players.saturating_sub(place) as f64 / (total_players - 1) as f64 * 100.0
        };

        next.total_scoreboard += scoreboard_percent;
        next.total_kills += row.kills as u64;
        next.total_deaths += row.deaths as u64;
        let day_matches = {
            let counter = next.matches_per_day.entry(time.date_naive()).or_insert(0);
            *counter += 1;
            *counter
        };

        let stats = &mut next.stats;
        stats.favorite_server = update_favorite(&mut next.server_frequency, endpoint, &stats.favorite_server);
        stats.favorite_game_mode = update_favorite(&mut next.game_mode_frequency, &info.game_mode, &stats.favorite_game_mode);
        stats.unique_servers = next.server_frequency.len() as u64;
        stats.total_matches_played += 1;
        if place == 1 {
            stats.total_matches_won += 1;
        }
        stats.average_scoreboard_percent = next.total_scoreboard / stats.total_matches_played as f64;
        stats.maximum_matches_per_day = stats.maximum_matches_per_day.max(day_matches);
        stats.average_matches_per_day = stats.total_matches_played as f64 / next.matches_per_day.len() as f64;
        stats.last_match_played = match parse_timestamp(&stats.last_match_played) {
            Some(previous) if previous >= time => stats.last_match_played.clone(),
            _ => timestamp.to_string(),
        };
        stats.kill_to_death_ratio = match next.total_deaths {
            0 => None,
            deaths => Some(next.total_kills as f64 / deaths as f64),
        };
        next
    }

    /// Whether the player may appear in the best players report.
    pub fn is_best_player_eligible(&self, min_matches: u64) -> bool
    {
        self.total_deaths != 0 && self.stats.total_matches_played >= min_matches
    }
}

/// Counts one more use of `value`; it becomes the favorite only when used
/// strictly more often than the current one.
fn update_favorite(frequency: &mut BTreeMap<String, u64>, value: &str, current: &str) -> String
{
    let uses = {
        let counter = frequency.entry(value.to_string()).or_insert(0);
        *counter += 1;
        *counter
    };
    if current.is_empty() {
        return value.to_string();
    }
    let favorite_uses = frequency.get(current).copied().unwrap_or(0);
    if uses > favorite_uses {
        value.to_string()
    } else {
        current.to_string()
    }
}
