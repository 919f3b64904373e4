#[cfg(test)]
mod aggregates_tests {
    use crate::common::common::parse_timestamp;
    use crate::statistics::structs::match_info::MatchInfo;
    use crate::statistics::structs::player_match_info::PlayerMatchInfo;
    use chrono::{DateTime, Utc};

    fn time(timestamp: &str) -> DateTime<Utc> {
        parse_timestamp(timestamp).unwrap()
    }

    fn row(name: &str, kills: u32, deaths: u32) -> PlayerMatchInfo {
        PlayerMatchInfo {
            name: name.to_string(),
            frags: kills,
            kills,
            deaths,
        }
    }

    fn match_info(map: &str, game_mode: &str, players: usize) -> MatchInfo {
        MatchInfo {
            map: map.to_string(),
            game_mode: game_mode.to_string(),
            frag_limit: 20,
            time_limit: 20,
            time_elapsed: 12.345678,
            scoreboard: (0..players).map(|index| row(&format!("player{index}"), 10, 3)).collect(),
        }
    }

    mod server_aggregate_tests {
        use super::{match_info, time};
        use crate::aggregates::structs::server_aggregate::ServerAggregate;

        #[test]
        fn test_first_match() {
            let aggregate = ServerAggregate::default().update(time("2017-01-22T15:17:00Z"), &match_info("DM-HelloWorld", "DM", 3), 5);
            assert_eq!(aggregate.stats.total_matches_played, 1);
            assert_eq!(aggregate.stats.maximum_matches_per_day, 1);
            assert_eq!(aggregate.stats.average_matches_per_day, 1.0);
            assert_eq!(aggregate.stats.maximum_population, 3);
            assert_eq!(aggregate.stats.average_population, 3.0);
            assert_eq!(aggregate.stats.top5_maps.as_slice(), &[String::from("DM-HelloWorld")]);
            assert_eq!(aggregate.stats.top5_game_modes.as_slice(), &[String::from("DM")]);
            assert_eq!(aggregate.days_with_matches, 1);
        }

        #[test]
        fn test_previous_snapshot_untouched() {
            let first = ServerAggregate::default().update(time("2017-01-22T15:17:00Z"), &match_info("map", "DM", 2), 5);
            let copy = first.clone();
            let _second = first.update(time("2017-01-22T16:17:00Z"), &match_info("map", "DM", 4), 5);
            assert_eq!(first, copy);
        }

        #[test]
        fn test_populations_over_three_days() {
            let events = [
                ("2017-01-20T10:00:00Z", 2),
                ("2017-01-20T11:00:00Z", 5),
                ("2017-01-21T10:00:00Z", 3),
                ("2017-01-21T11:00:00Z", 3),
                ("2017-01-21T12:00:00Z", 2),
                ("2017-01-22T10:00:00Z", 2),
                ("2017-01-22T11:00:00Z", 2),
            ];
            let mut aggregate = ServerAggregate::default();
            for (timestamp, players) in events {
                aggregate = aggregate.update(time(timestamp), &match_info("map", "DM", players), 5);
            }
            assert_eq!(aggregate.stats.total_matches_played, 7);
            assert_eq!(aggregate.stats.maximum_population, 5);
            assert_eq!(aggregate.stats.average_population, 19.0 / 7.0);
            assert_eq!(aggregate.stats.maximum_matches_per_day, 3);
            assert_eq!(aggregate.days_with_matches, 3);
            assert_eq!(aggregate.stats.average_matches_per_day, 7.0 / 3.0);
        }

        #[test]
        fn test_top_maps_follow_frequency() {
            let mut aggregate = ServerAggregate::default();
            for map in ["a", "b", "b", "c", "c", "c"] {
                aggregate = aggregate.update(time("2017-01-22T15:17:00Z"), &match_info(map, "DM", 1), 5);
            }
            assert_eq!(aggregate.stats.top5_maps.as_slice(), &[String::from("c"), String::from("b"), String::from("a")]);
            assert_eq!(aggregate.map_frequency.get("c"), Some(&3));
        }

        #[test]
        fn test_top_list_bounded() {
            let mut aggregate = ServerAggregate::default();
            for map in ["a", "a", "b", "b", "c", "c", "d", "d", "e", "e", "f"] {
                aggregate = aggregate.update(time("2017-01-22T15:17:00Z"), &match_info(map, "DM", 1), 5);
            }
            assert_eq!(aggregate.stats.top5_maps.len(), 5);
            assert!(!aggregate.stats.top5_maps.as_slice().contains(&String::from("f")));
            aggregate = aggregate.update(time("2017-01-22T15:17:00Z"), &match_info("f", "DM", 1), 5);
            aggregate = aggregate.update(time("2017-01-22T15:17:00Z"), &match_info("f", "DM", 1), 5);
            assert_eq!(aggregate.stats.top5_maps.as_slice()[0], "f");
        }

        #[test]
        fn test_empty_scoreboard() {
            let aggregate = ServerAggregate::default().update(time("2017-01-22T15:17:00Z"), &match_info("map", "DM", 0), 5);
            assert_eq!(aggregate.stats.maximum_population, 0);
            assert_eq!(aggregate.stats.average_population, 0.0);
        }

        #[test]
        fn test_public_stats_json_names() {
            let aggregate = ServerAggregate::default().update(time("2017-01-22T15:17:00Z"), &match_info("map", "DM", 1), 5);
            let json = serde_json::to_value(&aggregate.stats).unwrap();
            assert_eq!(json["totalMatchesPlayed"], 1);
            assert_eq!(json["top5Maps"][0], "map");
            assert_eq!(json["top5GameModes"][0], "DM");
            assert!(json.get("averagePopulation").is_some());
        }
    }

    mod player_aggregate_tests {
        use super::{match_info, row, time};
        use crate::aggregates::structs::player_aggregate::PlayerAggregate;

        #[test]
        fn test_single_player_percentile() {
            let info = match_info("map", "DM", 1);
            let aggregate = PlayerAggregate::default().update("srv-1", "2017-01-22T15:17:00Z", time("2017-01-22T15:17:00Z"), 1, &info, &info.scoreboard[0]);
            assert_eq!(aggregate.stats.average_scoreboard_percent, 100.0);
            assert_eq!(aggregate.stats.total_matches_won, 1);
        }

        #[test]
        fn test_two_player_percentile() {
            let info = match_info("map", "DM", 2);
            let winner = PlayerAggregate::default().update("srv-1", "2017-01-22T15:17:00Z", time("2017-01-22T15:17:00Z"), 1, &info, &info.scoreboard[0]);
            let loser = PlayerAggregate::default().update("srv-1", "2017-01-22T15:17:00Z", time("2017-01-22T15:17:00Z"), 2, &info, &info.scoreboard[1]);
            assert_eq!(winner.stats.average_scoreboard_percent, 100.0);
            assert_eq!(loser.stats.average_scoreboard_percent, 0.0);
            assert_eq!(loser.stats.total_matches_won, 0);
        }

        #[test]
        fn test_middle_percentile() {
            let info = match_info("map", "DM", 5);
            let aggregate = PlayerAggregate::default().update("srv-1", "2017-01-22T15:17:00Z", time("2017-01-22T15:17:00Z"), 2, &info, &info.scoreboard[1]);
            assert_eq!(aggregate.stats.average_scoreboard_percent, 75.0);
        }

        #[test]
        fn test_kill_to_death_ratio() {
            let info = match_info("map", "DM", 1);
            let no_deaths = PlayerAggregate::default().update("srv-1", "2017-01-22T15:17:00Z", time("2017-01-22T15:17:00Z"), 1, &info, &row("p", 10, 0));
            assert_eq!(no_deaths.stats.kill_to_death_ratio, None);
            let with_deaths = no_deaths.update("srv-1", "2017-01-22T16:17:00Z", time("2017-01-22T16:17:00Z"), 1, &info, &row("p", 5, 3));
            assert_eq!(with_deaths.stats.kill_to_death_ratio, Some(5.0));
        }

        #[test]
        fn test_favorite_keeps_previous_on_tie() {
            let info = match_info("map", "DM", 1);
            let first = PlayerAggregate::default().update("srv-a", "2017-01-22T15:17:00Z", time("2017-01-22T15:17:00Z"), 1, &info, &info.scoreboard[0]);
            let second = first.update("srv-b", "2017-01-22T15:18:00Z", time("2017-01-22T15:18:00Z"), 1, &info, &info.scoreboard[0]);
            assert_eq!(second.stats.favorite_server, "srv-a");
            assert_eq!(second.stats.unique_servers, 2);
            let third = second.update("srv-b", "2017-01-22T15:19:00Z", time("2017-01-22T15:19:00Z"), 1, &info, &info.scoreboard[0]);
            assert_eq!(third.stats.favorite_server, "srv-b");
        }

        #[test]
        fn test_last_match_played_keeps_latest() {
            let info = match_info("map", "DM", 1);
            let later = PlayerAggregate::default().update("srv-1", "2017-01-23T15:17:00Z", time("2017-01-23T15:17:00Z"), 1, &info, &info.scoreboard[0]);
            let earlier = later.update("srv-1", "2017-01-22T15:17:00Z", time("2017-01-22T15:17:00Z"), 1, &info, &info.scoreboard[0]);
            assert_eq!(earlier.stats.last_match_played, "2017-01-23T15:17:00Z");
        }

        #[test]
        fn test_matches_per_day() {
            let info = match_info("map", "DM", 1);
            let mut aggregate = PlayerAggregate::default();
            for timestamp in ["2017-01-22T10:00:00Z", "2017-01-22T11:00:00Z", "2017-01-22T12:00:00Z", "2017-01-23T10:00:00Z"] {
                aggregate = aggregate.update("srv-1", timestamp, time(timestamp), 1, &info, &info.scoreboard[0]);
            }
            assert_eq!(aggregate.stats.maximum_matches_per_day, 3);
            assert_eq!(aggregate.stats.average_matches_per_day, 2.0);
        }

        #[test]
        fn test_best_player_eligibility() {
            let info = match_info("map", "DM", 1);
            let mut aggregate = PlayerAggregate::default();
            for _ in 0..9 {
                aggregate = aggregate.update("srv-1", "2017-01-22T10:00:00Z", time("2017-01-22T10:00:00Z"), 1, &info, &row("p", 3, 1));
            }
            assert!(!aggregate.is_best_player_eligible(10));
            aggregate = aggregate.update("srv-1", "2017-01-22T10:00:00Z", time("2017-01-22T10:00:00Z"), 1, &info, &row("p", 3, 1));
            assert!(aggregate.is_best_player_eligible(10));

            let mut immortal = PlayerAggregate::default();
            for _ in 0..20 {
                immortal = immortal.update("srv-1", "2017-01-22T10:00:00Z", time("2017-01-22T10:00:00Z"), 1, &info, &row("p", 30, 0));
            }
            assert!(!immortal.is_best_player_eligible(10));
        }

        #[test]
        fn test_public_stats_json_names() {
            let info = match_info("map", "DM", 1);
            let aggregate = PlayerAggregate::default().update("srv-1", "2017-01-22T15:17:00Z", time("2017-01-22T15:17:00Z"), 1, &info, &info.scoreboard[0]);
            let json = serde_json::to_value(&aggregate.stats).unwrap();
            assert_eq!(json["favoriteServer"], "srv-1");
            assert_eq!(json["favoriteGameMode"], "DM");
            assert_eq!(json["lastMatchPlayed"], "2017-01-22T15:17:00Z");
            assert_eq!(json["killToDeathRatio"], 10.0 / 3.0);
        }
    }
}
