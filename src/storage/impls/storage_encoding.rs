use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::enums::storage_encoding::StorageEncoding;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::traits::value_codec::ValueCodec;

impl ValueCodec for StorageEncoding {
    fn encode<V: Serialize>(&self, value: &V) -> Result<Vec<u8>, StorageError>
    {
        match self {
            StorageEncoding::msgpack => rmp_serde::to_vec_named(value).map_err(|e| StorageError::Encode(e.to_string())),
            StorageEncoding::json => serde_json::to_vec(value).map_err(|e| StorageError::Encode(e.to_string())),
        }
    }

    fn decode<V: DeserializeOwned>(&self, data: &[u8]) -> Result<V, StorageError>
    {
        match self {
            StorageEncoding::msgpack => rmp_serde::from_slice(data).map_err(|e| StorageError::Decode(e.to_string())),
            StorageEncoding::json => serde_json::from_slice(data).map_err(|e| StorageError::Decode(e.to_string())),
        }
    }
}
