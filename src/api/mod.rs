//! REST API module for match ingestion and statistics queries.
//!
//! A thin adapter over the `StatisticsManager` operations. Bodies are JSON
//! with camelCase field names; every error response is a JSON object with a
//! `status` field.
//!
//! # Endpoints Overview
//!
//! ## Servers
//! - `PUT /servers/{endpoint}/info` - Advertise a server (200 / 400)
//! - `GET /servers/{endpoint}/info` - Get the advertised description (200 / 404)
//! - `GET /servers/info` - List all advertised servers
//! - `PUT /servers/{endpoint}/matches/{timestamp}` - Submit a match result (200 / 400)
//! - `GET /servers/{endpoint}/matches/{timestamp}` - Get a stored match (200 / 404)
//! - `GET /servers/{endpoint}/stats` - Get server statistics (200 / 404)
//!
//! ## Players
//! - `GET /players/{name}/stats` - Get player statistics (200 / 404)
//!
//! ## Reports
//! - `GET /reports/recent-matches[/{count}]`
//! - `GET /reports/best-players[/{count}]`
//! - `GET /reports/popular-servers[/{count}]`
//!
//! Without `{count}` the configured default is used; counts are clamped to
//! `[0, max_report_size]` and a non-numeric count is a 400.
//!
//! ## Service
//! - `GET /stats` - Service counters
//!
//! Unknown paths answer 404, storage failures 500.

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Player statistics endpoint.
pub mod api_players;

/// Ranked report endpoints.
pub mod api_reports;

/// Server advertise, match and statistics endpoints.
pub mod api_servers;

/// Service counter endpoint.
pub mod api_stats;
