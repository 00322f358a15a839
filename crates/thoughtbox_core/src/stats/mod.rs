//! Mood aggregation entry points.
//!
//! # Responsibility
//! - Derive mood frequency data from the thought list.
//! - Keep chart shaping inside core so every surface renders the same data.

pub mod mood_stats;
