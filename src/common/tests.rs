#[cfg(test)]
mod common_tests {
    use chrono::{Datelike, Timelike};
    use crate::common::common::{is_valid_endpoint, normalize_key, parse_timestamp};
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_valid_endpoints() {
        assert!(is_valid_endpoint("hostname1-990"));
        assert!(is_valid_endpoint("192.168.124.255-65500"));
        assert!(is_valid_endpoint("game.example.com-27015"));
        assert!(is_valid_endpoint("srv_1-1"));
    }

    #[test]
    fn test_invalid_endpoints() {
        assert!(!is_valid_endpoint(""));
        assert!(!is_valid_endpoint("hostname"));
        assert!(!is_valid_endpoint("hostname-"));
        assert!(!is_valid_endpoint("-8080"));
        assert!(!is_valid_endpoint("host-name-8080"));
        assert!(!is_valid_endpoint("hostname-port"));
        assert!(!is_valid_endpoint("hostname-70000"));
        assert!(!is_valid_endpoint("bad host-8080"));
        assert!(!is_valid_endpoint("host..name-8080"));
    }

    #[test]
    fn test_parse_timestamp_valid() {
        let instant = parse_timestamp("2017-01-22T15:17:00Z").unwrap();
        assert_eq!(instant.year(), 2017);
        assert_eq!(instant.month(), 1);
        assert_eq!(instant.day(), 22);
        assert_eq!(instant.hour(), 15);
        assert_eq!(instant.minute(), 17);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2017-01-22").is_none());
        assert!(parse_timestamp("2017-01-22T15:17:00").is_none());
        assert!(parse_timestamp("2017-01-22T15:17:00+03:00").is_none());
        assert!(parse_timestamp("2017-13-22T15:17:00Z").is_none());
        assert!(parse_timestamp("2017-1-22T15:17:00Z").is_none());
    }

    #[test]
    fn test_parse_timestamp_ordering() {
        let earlier = parse_timestamp("2017-01-22T15:16:00Z").unwrap();
        let later = parse_timestamp("2017-01-22T15:17:00Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("HostName1-990"), "hostname1-990");
        assert_eq!(normalize_key("P1"), "p1");
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(format!("{}", error), "could not create config.toml file");
    }
}
