use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::storage::enums::storage_error::StorageError;

/// Turns stored values into bytes and back.
///
/// The store does not care about the concrete format; anything that can
/// round-trip a serde value qualifies.
pub trait ValueCodec: Send + Sync {
    fn encode<V: Serialize>(&self, value: &V) -> Result<Vec<u8>, StorageError>;

    fn decode<V: DeserializeOwned>(&self, data: &[u8]) -> Result<V, StorageError>;
}
