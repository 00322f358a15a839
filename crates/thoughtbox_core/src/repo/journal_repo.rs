//! Journal snapshot codec over string-keyed storage.
//!
//! # Responsibility
//! - Serialize the full thought list + session mood on every save.
//! - Decode persisted snapshots back into validated domain types.
//!
//! # Invariants
//! - Key `thoughts` holds the JSON thought array, most recent first.
//! - Key `currentMood` holds one lowercase mood name.
//! - `color` is written for each thought but recomputed from `mood` on load,
//!   never trusted from storage.

use crate::model::thought::{Mood, Thought, ThoughtId};
use crate::repo::kv_repo::{KvRepository, RepoError, RepoResult};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Storage key for the serialized thought list.
pub const THOUGHTS_KEY: &str = "thoughts";
/// Storage key for the session mood.
pub const CURRENT_MOOD_KEY: &str = "currentMood";

/// Whole-journal state persisted as one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JournalSnapshot {
    /// Thoughts in reverse-chronological order, most recent first.
    pub thoughts: Vec<Thought>,
    /// Mood assigned to the next captured thought.
    pub mood: Mood,
}

/// Repository interface for journal snapshot persistence.
pub trait JournalRepository {
    /// Loads the persisted snapshot; absent state yields the empty default.
    fn load(&self) -> RepoResult<JournalSnapshot>;
    /// Persists the full snapshot, overwriting the prior one.
    fn save(&self, snapshot: &JournalSnapshot) -> RepoResult<()>;
}

/// Persisted wire shape of one thought.
///
/// Field names match the external layout (`timestamp`, `color`) rather than
/// the domain struct.
#[derive(Debug, Serialize, Deserialize)]
struct StoredThought {
    id: ThoughtId,
    text: String,
    mood: Mood,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    color: String,
}

impl From<&Thought> for StoredThought {
    fn from(thought: &Thought) -> Self {
        Self {
            id: thought.id,
            text: thought.text.clone(),
            mood: thought.mood,
            timestamp: thought.created_at,
            color: thought.color().to_string(),
        }
    }
}

impl From<StoredThought> for Thought {
    fn from(stored: StoredThought) -> Self {
        Self {
            id: stored.id,
            text: stored.text,
            mood: stored.mood,
            created_at: stored.timestamp,
        }
    }
}

/// Journal repository over any string-keyed storage backend.
pub struct KvJournalRepository<K: KvRepository> {
    kv: K,
}

impl<K: KvRepository> KvJournalRepository<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }
}

impl<K: KvRepository> JournalRepository for KvJournalRepository<K> {
    fn load(&self) -> RepoResult<JournalSnapshot> {
        let thoughts = match self.kv.get(THOUGHTS_KEY)? {
            Some(raw) => decode_thoughts(&raw)?,
            None => Vec::new(),
        };

        let mood = match self.kv.get(CURRENT_MOOD_KEY)? {
            Some(raw) => Mood::parse(&raw).ok_or_else(|| {
                RepoError::InvalidData(format!("unknown mood `{raw}` under `{CURRENT_MOOD_KEY}`"))
            })?,
            None => Mood::default(),
        };

        info!(
            "event=journal_load module=repo status=ok thought_count={} mood={mood}",
            thoughts.len()
        );
        Ok(JournalSnapshot { thoughts, mood })
    }

    fn save(&self, snapshot: &JournalSnapshot) -> RepoResult<()> {
        let stored: Vec<StoredThought> = snapshot.thoughts.iter().map(StoredThought::from).collect();
        let encoded = serde_json::to_string(&stored).map_err(|err| {
            RepoError::InvalidData(format!("failed to encode thought list: {err}"))
        })?;

        self.kv.set(THOUGHTS_KEY, &encoded)?;
        self.kv.set(CURRENT_MOOD_KEY, snapshot.mood.as_str())?;

        info!(
            "event=journal_save module=repo status=ok thought_count={} mood={}",
            snapshot.thoughts.len(),
            snapshot.mood
        );
        Ok(())
    }
}

fn decode_thoughts(raw: &str) -> RepoResult<Vec<Thought>> {
    let stored: Vec<StoredThought> = serde_json::from_str(raw).map_err(|err| {
        RepoError::InvalidData(format!("failed to decode `{THOUGHTS_KEY}`: {err}"))
    })?;
    Ok(stored.into_iter().map(Thought::from).collect())
}
