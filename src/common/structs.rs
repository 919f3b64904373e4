//! Common data structures.

/// Simple message based error type.
pub mod custom_error;
