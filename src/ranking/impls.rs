//! Implementation blocks for ranked lists.

/// Update, slicing and conversions.
pub mod ranked_top_list;
