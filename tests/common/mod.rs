#![allow(dead_code)]
use rand::RngExt;
use std::sync::Arc;
use tempfile::TempDir;
use gamestats_actix::api::structs::api_service_data::ApiServiceData;
use gamestats_actix::config::structs::configuration::Configuration;
use gamestats_actix::statistics::structs::advertise_info::AdvertiseInfo;
use gamestats_actix::statistics::structs::match_info::MatchInfo;
use gamestats_actix::statistics::structs::player_match_info::PlayerMatchInfo;
use gamestats_actix::statistics::structs::statistics_manager::StatisticsManager;

pub type TestManager = Arc<StatisticsManager>;
pub type TestConfig = Arc<Configuration>;

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn create_test_config(dir: &TempDir) -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.storage.path = dir.path().to_string_lossy().into_owned();
    config.storage.bucket_count = 16;
    config.api_server.bind_address = String::from("127.0.0.1:0");
    Arc::new(config)
}

pub fn create_test_manager(dir: &TempDir) -> TestManager {
    Arc::new(StatisticsManager::new(create_test_config(dir)).expect("Failed to open statistics storage"))
}

pub fn create_test_service_data(manager: TestManager) -> Arc<ApiServiceData> {
    Arc::new(ApiServiceData {
        api_server_config: Arc::new(manager.config.api_server.clone()),
        statistics_manager: manager,
    })
}

pub fn advertise(name: &str) -> AdvertiseInfo {
    AdvertiseInfo {
        name: name.to_string(),
        game_modes: vec![String::from("DM"), String::from("TDM")],
    }
}

/// A match on `map`/`mode`; `players` are `(name, kills, deaths)` in scoreboard order.
pub fn match_on(map: &str, mode: &str, players: &[(&str, u32, u32)]) -> MatchInfo {
    MatchInfo {
        map: map.to_string(),
        game_mode: mode.to_string(),
        frag_limit: 20,
        time_limit: 20,
        time_elapsed: 12.345678,
        scoreboard: players.iter().map(|(name, kills, deaths)| PlayerMatchInfo {
            name: name.to_string(),
            frags: *kills,
            kills: *kills,
            deaths: *deaths,
        }).collect(),
    }
}

pub fn random_player_name() -> String {
    let mut rng = rand::rng();
    let suffix: u32 = rng.random();
    format!("player{suffix}")
}

pub fn random_endpoint() -> String {
    let mut rng = rand::rng();
    let port: u16 = rng.random_range(1024..u16::MAX);
    format!("10.0.0.{}-{port}", rng.random_range(1..255u8))
}
