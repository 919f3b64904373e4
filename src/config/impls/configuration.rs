use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::storage_encoding::StorageEncoding;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::statistics_config::StatisticsConfig;
use crate::config::structs::storage_config::StorageConfig;
use crate::statistics::structs::statistics_manager::BEST_PLAYERS_MIN_MATCHES;

/// Levels understood by the logger.
pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            storage: StorageConfig {
                path: String::from("data"),
                bucket_count: 3000,
                encoding: StorageEncoding::msgpack,
                keep_matches_in_memory: false,
            },
            statistics: StatisticsConfig {
                max_report_size: 50,
                default_report_count: 5,
                best_players_min_matches: BEST_PLAYERS_MIN_MATCHES,
                top_entries_size: 5,
            },
            api_server: ApiServerConfig {
                enabled: true,
                bind_address: String::from("0.0.0.0:8080"),
                keep_alive: 60,
                request_timeout: 30,
                disconnect_timeout: 30,
                threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(4),
                max_body_size: 1024 * 1024,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new("created the config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create the config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("log_level '{}' must be one of {}", self.log_level, LOG_LEVELS.join(", "))));
        }
        if self.storage.path.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("storage.path must not be empty")));
        }
        if self.storage.bucket_count == 0 {
            return Err(ConfigurationError::ValidationError(String::from("storage.bucket_count must be greater than 0")));
        }
        if self.statistics.max_report_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("statistics.max_report_size must be greater than 0")));
        }
        if self.statistics.top_entries_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("statistics.top_entries_size must be greater than 0")));
        }
        if self.api_server.enabled && self.api_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!("api_server.bind_address '{}' is not a socket address", self.api_server.bind_address)));
        }
        Ok(())
    }
}
