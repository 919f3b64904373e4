//! Storage traits.

/// Serialize/deserialize capability used by the store.
pub mod value_codec;
