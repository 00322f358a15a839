//! Domain model for the thought journal.
//!
//! # Responsibility
//! - Define the canonical `Thought` record and the closed `Mood` enumeration.
//! - Enforce model-level invariants before anything reaches persistence.
//!
//! # Invariants
//! - Every `Thought` is identified by a stable `ThoughtId` that is never
//!   reused for another thought.
//! - No `Thought` exists with an unrecognized mood.

pub mod thought;
