//! Statistics enumerations.

/// Failures that abort a statistics operation.
pub mod statistics_error;
