//! Journal use-case service.
//!
//! # Responsibility
//! - Own the in-memory journal state, loaded once at construction.
//! - Apply the capture/remove/mood contracts and persist after each mutation.
//!
//! # Invariants
//! - Thoughts are kept most-recent-first; new thoughts are prepended.
//! - Every mutation persists the full snapshot before returning success.
//! - In-memory state is rolled back when a snapshot write fails.

use crate::model::thought::{Mood, Thought, ThoughtId, ThoughtValidationError};
use crate::repo::journal_repo::{JournalRepository, JournalSnapshot};
use crate::repo::kv_repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum JournalError {
    /// Thought input failed model validation.
    Validation(ThoughtValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ThoughtValidationError> for JournalError {
    fn from(value: ThoughtValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for JournalError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Journal facade owning the loaded snapshot and its persistence.
///
/// Constructed once at startup; all mutations flow through this service, so
/// it is the sole owner of thought lifetime.
pub struct JournalService<R: JournalRepository> {
    repo: R,
    snapshot: JournalSnapshot,
}

impl<R: JournalRepository> JournalService<R> {
    /// Loads the persisted snapshot and wraps it with the repository.
    pub fn load(repo: R) -> RepoResult<Self> {
        let snapshot = repo.load()?;
        Ok(Self { repo, snapshot })
    }

    /// Captures a thought with an explicit mood.
    ///
    /// # Contract
    /// - Empty-after-trim text is rejected and the journal stays unchanged.
    /// - The new thought is prepended and the full snapshot is persisted.
    pub fn add(&mut self, text: impl Into<String>, mood: Mood) -> Result<Thought, JournalError> {
        let thought = Thought::new(text, mood)?;

        self.snapshot.thoughts.insert(0, thought.clone());
        if let Err(err) = self.repo.save(&self.snapshot) {
            self.snapshot.thoughts.remove(0);
            return Err(err.into());
        }

        info!(
            "event=thought_add module=service status=ok id={} mood={}",
            thought.id, thought.mood
        );
        Ok(thought)
    }

    /// Captures a thought using the current session mood.
    pub fn capture(&mut self, text: impl Into<String>) -> Result<Thought, JournalError> {
        let mood = self.snapshot.mood;
        self.add(text, mood)
    }

    /// Removes the thought with the given id.
    ///
    /// Returns `true` when a thought was removed; an absent id is a no-op,
    /// not an error. The resulting list is persisted either way.
    pub fn remove(&mut self, id: ThoughtId) -> Result<bool, JournalError> {
        let position = self.snapshot.thoughts.iter().position(|t| t.id == id);
        let removed = position.map(|index| self.snapshot.thoughts.remove(index));

        if let Err(err) = self.repo.save(&self.snapshot) {
            if let (Some(index), Some(thought)) = (position, removed) {
                self.snapshot.thoughts.insert(index, thought);
            }
            return Err(err.into());
        }

        info!(
            "event=thought_remove module=service status=ok id={id} removed={}",
            position.is_some()
        );
        Ok(position.is_some())
    }

    /// Returns the current thoughts, most recent first.
    pub fn thoughts(&self) -> &[Thought] {
        &self.snapshot.thoughts
    }

    /// Returns the current session mood.
    pub fn mood(&self) -> Mood {
        self.snapshot.mood
    }

    /// Updates the session mood used by future `capture` calls.
    ///
    /// Persisted immediately alongside the thought list.
    pub fn set_mood(&mut self, mood: Mood) -> Result<(), JournalError> {
        let previous = self.snapshot.mood;
        self.snapshot.mood = mood;
        if let Err(err) = self.repo.save(&self.snapshot) {
            self.snapshot.mood = previous;
            return Err(err.into());
        }

        info!("event=mood_set module=service status=ok mood={mood}");
        Ok(())
    }
}
