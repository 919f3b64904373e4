//! Configuration enumerations.

/// Errors raised while loading, saving or validating the configuration.
pub mod configuration_error;

/// On-disk value encoding of the sharded stores.
pub mod storage_encoding;
