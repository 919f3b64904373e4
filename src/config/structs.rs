//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// API server configuration (address, workers, timeouts).
pub mod api_server_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Report sizes and ranking thresholds.
pub mod statistics_config;

/// Sharded storage location and layout.
pub mod storage_config;
