//! Ranked list structures.

/// Bounded, unique, descending sorted list.
pub mod ranked_top_list;
