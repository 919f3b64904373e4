//! Incremental per-server and per-player statistics.
//!
//! An aggregate holds the public statistics served by the API together with
//! the running counters needed to derive them. `update` never touches the
//! previous snapshot: it returns a new aggregate built from the old one plus
//! a single event, so a reader holding the previous value never sees a half
//! applied match.
//!
//! Public fields are a pure function of the counters; replaying the same
//! events in the same order yields the same snapshot.

/// Update logic for both aggregate kinds.
pub mod impls;

/// Aggregate and public statistics structures.
pub mod structs;

/// Unit tests for aggregate updates.
pub mod tests;
