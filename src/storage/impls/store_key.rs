use std::path::PathBuf;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use sha1::{Digest, Sha1};
use crate::storage::structs::store_key::StoreKey;

/// Directory holding the secondary keys of a double key.
pub const INNER_DIRECTORY: &str = "Inner";

/// Longest escaped key used verbatim as a path segment.
pub const MAX_SEGMENT_LENGTH: usize = 200;

/// Readable part kept in front of the digest of a hashed segment.
const HASHED_PREFIX_LENGTH: usize = 48;

/// Joins prefix and digest of a hashed segment. Escaped keys never contain it.
pub const HASHED_SEPARATOR: char = '_';

/// Suffix of the file next to a hashed segment that holds the full key.
pub const KEY_FILE_SUFFIX: &str = ".key";

impl StoreKey {
    pub fn single(key: &str) -> StoreKey
    {
        StoreKey {
            primary: key.to_string(),
            secondary: None,
        }
    }

    pub fn double(key1: &str, key2: &str) -> StoreKey
    {
        StoreKey {
            primary: key1.to_string(),
            secondary: Some(key2.to_string()),
        }
    }

    /// Bucket index of this key, stable across restarts and platforms.
    pub fn bucket(&self, bucket_count: u64) -> u64
    {
        let digest = Sha1::digest(self.primary.as_bytes());
        let hash = digest.iter().take(8).fold(0u64, |acc, byte| (acc << 8) | *byte as u64);
        hash % bucket_count.max(1)
    }

    /// Path of the primary segment: the value file of a single key, the
    /// directory of a double key.
    pub fn primary_path(&self, bucket_count: u64) -> PathBuf
    {
        let mut path = PathBuf::from(self.bucket(bucket_count).to_string());
        path.push(key_segment(&self.primary));
        path
    }

    /// Path of the value file, relative to the base directory of the store.
    pub fn relative_path(&self, bucket_count: u64) -> PathBuf
    {
        let mut path = self.primary_path(bucket_count);
        if let Some(secondary) = &self.secondary {
            path.push(INNER_DIRECTORY);
            path.push(key_segment(secondary));
        }
        path
    }
}

/// File or directory name of one key component.
///
/// Short keys are escaped verbatim. Keys whose escaped form exceeds
/// `MAX_SEGMENT_LENGTH` become `<escaped prefix>_<sha1 hex>`, which always
/// fits a file name; their full key is kept in a `.key` file alongside.
pub fn key_segment(key: &str) -> String
{
    let escaped = escape_key(key);
    if escaped.len() <= MAX_SEGMENT_LENGTH {
        return escaped;
    }

    let mut prefix = String::new();
    let mut buffer = [0u8; 4];
    for character in key.chars() {
        let part = escape_key(character.encode_utf8(&mut buffer));
        if prefix.len() + part.len() > HASHED_PREFIX_LENGTH {
            break;
        }
        prefix.push_str(&part);
    }
    let digest: String = Sha1::digest(key.as_bytes()).iter().map(|byte| format!("{byte:02x}")).collect();
    format!("{prefix}{HASHED_SEPARATOR}{digest}")
}

pub fn is_hashed_segment(segment: &str) -> bool
{
    segment.contains(HASHED_SEPARATOR)
}

/// Percent-encodes every non alphanumeric character, so the result is a
/// single safe path segment that never starts with a dot.
pub fn escape_key(key: &str) -> String
{
    utf8_percent_encode(key, NON_ALPHANUMERIC).to_string()
}

pub fn unescape_key(segment: &str) -> Option<String>
{
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|key| key.into_owned())
}
