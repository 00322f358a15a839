//! Core domain logic for Thoughtbox, a mood-tagged thought journal.
//! This crate is the single source of truth for journal invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod quote;
pub mod repo;
pub mod service;
pub mod stats;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::thought::{Mood, Thought, ThoughtId, ThoughtValidationError, ALL_MOODS};
pub use quote::client::{Quote, QuoteClient, FALLBACK_QUOTE};
pub use repo::journal_repo::{
    JournalRepository, JournalSnapshot, KvJournalRepository, CURRENT_MOOD_KEY, THOUGHTS_KEY,
};
pub use repo::kv_repo::{KvRepository, RepoError, RepoResult, SqliteKvRepository};
pub use service::journal_service::{JournalError, JournalService};
pub use stats::mood_stats::{chart_bars, counts_by_mood, max_count, ChartBar};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
