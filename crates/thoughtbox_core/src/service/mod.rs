//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into journal-level APIs.
//! - Keep the CLI layer decoupled from storage details.

pub mod journal_service;
