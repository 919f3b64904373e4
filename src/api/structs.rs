//! Data structures for the REST API module.

/// Shared data context for API request handlers.
pub mod api_service_data;
