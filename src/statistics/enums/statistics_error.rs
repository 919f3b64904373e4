use thiserror::Error;
use crate::storage::enums::storage_error::StorageError;

/// Unexpected failures only; rejected input and unknown keys are reported
/// through `bool` and `Option` results instead.
#[derive(Error, Debug)]
pub enum StatisticsError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
