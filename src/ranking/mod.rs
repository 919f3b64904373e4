//! Bounded ranked lists.
//!
//! A [`RankedTopList`](structs::ranked_top_list::RankedTopList) keeps at most
//! `max_size` items sorted descending by a rank key, with at most one item
//! per uniqueness key. The same type backs the recent matches, best players
//! and popular servers reports as well as the top maps and game modes of a
//! server; only the two key extractors differ.

/// RankedTopList implementation.
pub mod impls;

/// RankedTopList structure.
pub mod structs;
