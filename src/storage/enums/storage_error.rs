use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encode(String),

    #[error("Decoding error: {0}")]
    Decode(String),

    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    #[error("Store {0} is not held in memory")]
    NotInMemory(String),
}
