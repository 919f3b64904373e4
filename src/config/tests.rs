#[cfg(test)]
mod config_tests {
    mod storage_encoding_tests {
        use crate::config::enums::storage_encoding::StorageEncoding;

        #[test]
        fn test_storage_encoding_default() {
            let encoding = StorageEncoding::default();
            assert_eq!(encoding, StorageEncoding::msgpack);
        }

        #[test]
        fn test_storage_encoding_serialization() {
            let serialized = serde_json::to_string(&StorageEncoding::msgpack).unwrap();
            assert_eq!(serialized, "\"msgpack\"");
            let serialized = serde_json::to_string(&StorageEncoding::json).unwrap();
            assert_eq!(serialized, "\"json\"");
        }

        #[test]
        fn test_storage_encoding_deserialization() {
            let msgpack_enc: StorageEncoding = serde_json::from_str("\"msgpack\"").unwrap();
            assert_eq!(msgpack_enc, StorageEncoding::msgpack);
            let json_enc: StorageEncoding = serde_json::from_str("\"json\"").unwrap();
            assert_eq!(json_enc, StorageEncoding::json);
            assert!(serde_json::from_str::<StorageEncoding>("\"xml\"").is_err());
        }
    }

    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_configuration_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.storage.bucket_count, 3000);
            assert!(!config.storage.keep_matches_in_memory);
            assert_eq!(config.statistics.max_report_size, 50);
            assert_eq!(config.statistics.default_report_count, 5);
            assert_eq!(config.statistics.best_players_min_matches, 10);
            assert_eq!(config.statistics.top_entries_size, 5);
            assert!(config.api_server.threads > 0);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_configuration_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.storage.path, config.storage.path);
            assert_eq!(loaded.storage.encoding, config.storage.encoding);
            assert_eq!(loaded.api_server.bind_address, config.api_server.bind_address);
        }

        #[test]
        fn test_configuration_parse_error() {
            let result = Configuration::load(b"log_level = ");
            assert!(result.is_err());
        }

        #[test]
        fn test_configuration_rejects_zero_buckets() {
            let mut config = Configuration::init();
            config.storage.bucket_count = 0;
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_configuration_rejects_zero_report_size() {
            let mut config = Configuration::init();
            config.statistics.max_report_size = 0;
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_configuration_log_levels() {
            let mut config = Configuration::init();
            for level in ["off", "trace", "debug", "info", "warn", "error"] {
                config.log_level = level.to_string();
                assert!(config.validate().is_ok(), "{level} should be accepted");
            }
            config.log_level = String::from("verbose");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(message)) if message.contains("verbose")));
        }

        #[test]
        fn test_configuration_rejects_bad_bind_address() {
            let mut config = Configuration::init();
            config.api_server.bind_address = String::from("not-an-address");
            assert!(config.validate().is_err());
            config.api_server.enabled = false;
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_configuration_error_display() {
            let error = ConfigurationError::ValidationError(String::from("storage.path must not be empty"));
            assert_eq!(format!("{}", error), "Invalid configuration: storage.path must not be empty");
        }
    }
}
