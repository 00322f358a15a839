//! Inspirational quote fetching.
//!
//! # Responsibility
//! - Expose a best-effort client for one remote quote.
//! - Keep network failure handling inside core; callers never see errors.

pub mod client;
