//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the statistics service.
//!
//! # Utilities
//!
//! - Logging setup
//! - Server endpoint validation
//! - Match timestamp parsing
//!
//! # Data Structures
//!
//! - `CustomError` - Generic boot-time error type
//!
//! # Example
//!
//! ```rust,ignore
//! use gamestats_actix::common::common::{is_valid_endpoint, parse_timestamp};
//!
//! assert!(is_valid_endpoint("192.168.0.1-8080"));
//! let instant = parse_timestamp("2017-01-22T15:17:00Z");
//! assert!(instant.is_some());
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for common utilities.
pub mod tests;
