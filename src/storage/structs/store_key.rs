//! Key type of the sharded store.

/// Identifier of one stored value.
///
/// Most stores use a single string key. Matches are addressed by the pair
/// `(server endpoint, timestamp)`; the `secondary` part then selects a file
/// below the directory of the `primary` part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreKey {
    pub primary: String,
    pub secondary: Option<String>,
}
