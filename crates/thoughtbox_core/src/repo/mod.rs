//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the string-keyed snapshot storage contract.
//! - Isolate SQLite and JSON codec details from service orchestration.
//!
//! # Invariants
//! - Repository reads reject invalid persisted state instead of masking it.
//! - Snapshot writes always overwrite the full prior snapshot.

pub mod journal_repo;
pub mod kv_repo;
