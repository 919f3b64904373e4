//! # GameStats-Actix
//!
//! A statistics collector for multiplayer game servers, built on Actix-web.
//!
//! ## Overview
//!
//! Game servers advertise themselves and push the results of every finished
//! match. Each accepted match is persisted and folded into incremental
//! per-server and per-player aggregates, and into three ranked reports:
//! recent matches, best players and popular servers. Everything is stored as
//! one file per key inside a hashed bucket directory, so the service can be
//! restarted without losing state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gamestats_actix::config::structs::configuration::Configuration;
//! use gamestats_actix::statistics::structs::statistics_manager::StatisticsManager;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", true)?);
//! let manager = StatisticsManager::new(config)?;
//! ```
//!
//! ## Modules
//!
//! - [`aggregates`] - Incremental server and player statistics
//! - [`api`] - REST endpoints for ingestion and queries
//! - [`common`] - Logging setup, validation and shared helpers
//! - [`config`] - TOML configuration
//! - [`ranking`] - Bounded ranked lists
//! - [`statistics`] - The coordinator tying stores, aggregates and reports together
//! - [`stats`] - Runtime counters
//! - [`storage`] - Bucketed file-per-key persistence
//! - [`structs`] - CLI arguments

/// Incremental per-server and per-player aggregates.
pub mod aggregates;

/// REST API module.
///
/// Exposes advertise and match ingestion, per-entity statistics, the three
/// reports and the runtime counters over HTTP.
pub mod api;

/// Common utilities and shared functionality.
///
/// Logging setup, endpoint and timestamp validation and the generic error type.
pub mod common;

/// Configuration management module.
pub mod config;

/// Bounded, ranked and deduplicated lists used by the reports.
pub mod ranking;

/// The statistics coordinator.
///
/// Accepts advertises and matches, serialises updates per server and per
/// player, and answers every query the API exposes.
pub mod statistics;

/// Runtime counters shown on the console and through `/stats`.
pub mod stats;

/// Bucketed, file-per-key persistent store.
pub mod storage;

/// CLI argument parsing.
pub mod structs;
