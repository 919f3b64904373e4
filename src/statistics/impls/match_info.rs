use crate::statistics::structs::match_info::MatchInfo;

impl MatchInfo {
    /// Structural checks beyond what deserialization already enforces.
    pub fn is_valid(&self) -> bool
    {
        !self.map.is_empty()
            && !self.game_mode.is_empty()
            && self.time_elapsed.is_finite()
            && self.time_elapsed >= 0.0
            && self.scoreboard.iter().all(|row| !row.name.is_empty())
    }
}
