//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the service
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **log_level**: Logging verbosity
//! - **storage**: Sharded store location, bucket count and value encoding
//! - **statistics**: Report sizes and ranking thresholds
//! - **api_server**: HTTP API listener settings
//!
//! # Example
//!
//! ```rust,ignore
//! use gamestats_actix::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one if requested
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (storage encoding, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
