use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use crate::aggregates::structs::server_aggregate::ServerAggregate;
use crate::ranking::structs::ranked_top_list::RankedTopList;
use crate::statistics::structs::match_info::MatchInfo;

impl ServerAggregate {
    /// Snapshot after the match `info` that ended at `time`.
    pub fn update(&self, time: DateTime<Utc>, info: &MatchInfo, top_size: usize) -> ServerAggregate
    {
        let mut next = self.clone();
        let day = time.date_naive();
        if next.last_match_day == Some(day) {
            next.matches_in_last_day += 1;
        } else {
            next.days_with_matches += 1;
            next.matches_in_last_day = 1;
            next.last_match_day = Some(day);
        }

        let population = info.scoreboard.len() as u64;
        next.total_population += population;
        *next.map_frequency.entry(info.map.clone()).or_insert(0) += 1;
        *next.game_mode_frequency.entry(info.game_mode.clone()).or_insert(0) += 1;

        let stats = &mut next.stats;
        stats.total_matches_played += 1;
        stats.maximum_matches_per_day = stats.maximum_matches_per_day.max(next.matches_in_last_day);
        stats.average_matches_per_day = stats.total_matches_played as f64 / next.days_with_matches as f64;
        stats.maximum_population = stats.maximum_population.max(population);
        stats.average_population = next.total_population as f64 / stats.total_matches_played as f64;
        update_top(&mut stats.top5_maps, &next.map_frequency, top_size, &info.map);
        update_top(&mut stats.top5_game_modes, &next.game_mode_frequency, top_size, &info.game_mode);
        next
    }
}

/// Re-ranks `name` by its current frequency.
fn update_top(top: &mut RankedTopList<String>, frequency: &BTreeMap<String, u64>, top_size: usize, name: &str)
{
    top.update(
        top_size,
        |entry| frequency.get(entry).copied().unwrap_or(0),
        |entry| entry.clone(),
        name.to_string(),
    );
}
