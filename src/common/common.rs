use std::net::IpAddr;
use chrono::{DateTime, NaiveDateTime, Utc};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::structs::configuration::Configuration;

/// Wire format of a match timestamp, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

static HOSTNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)*$").expect("hostname pattern is valid")
});

pub fn setup_logging(config: &Configuration)
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

/// Checks the `host-port` shape of a server endpoint.
///
/// The host part is either an IP address or a dotted hostname, the port part
/// must fit an unsigned 16-bit integer. Exactly one `-` separates them.
pub fn is_valid_endpoint(endpoint: &str) -> bool
{
    let parts: Vec<&str> = endpoint.split('-').collect();
    if parts.len() != 2 {
        return false;
    }
    let (host, port) = (parts[0], parts[1]);
    if host.is_empty() || port.parse::<u16>().is_err() {
        return false;
    }
    host.parse::<IpAddr>().is_ok() || HOSTNAME_REGEX.is_match(host)
}

/// Parses a strict `YYYY-MM-DDTHH:MM:SSZ` timestamp into a UTC instant.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>>
{
    if timestamp.len() != 20 {
        return None;
    }
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Server endpoints and player names are case-insensitive identities.
pub fn normalize_key(key: &str) -> String
{
    key.to_lowercase()
}
