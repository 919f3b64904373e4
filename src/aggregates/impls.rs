//! Implementation blocks for aggregates.

pub mod player_aggregate;

pub mod server_aggregate;
