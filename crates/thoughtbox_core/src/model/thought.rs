//! Thought domain model and mood enumeration.
//!
//! # Responsibility
//! - Define the canonical thought record shared by store, stats and CLI.
//! - Own mood parsing and the mood-to-color projection.
//!
//! # Invariants
//! - `id` is stable and never reused for another thought.
//! - `text` is non-empty after trimming; constructors reject anything else.
//! - `color()` is fully determined by `mood` and is never stored as
//!   independent state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a thought.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Random UUIDs replace the original wall-clock ids, which could collide for
/// two thoughts created within the same clock tick.
pub type ThoughtId = Uuid;

/// Closed mood enumeration for thought tagging.
///
/// The lowercase serde representation matches the persisted `mood` strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    #[default]
    Calm,
    Energetic,
    Productive,
    Creative,
}

/// All moods in canonical display order.
pub const ALL_MOODS: [Mood; 5] = [
    Mood::Happy,
    Mood::Calm,
    Mood::Energetic,
    Mood::Productive,
    Mood::Creative,
];

impl Mood {
    /// Returns the lowercase storage/display name of this mood.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Productive => "productive",
            Self::Creative => "creative",
        }
    }

    /// Parses one lowercase mood name. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "happy" => Some(Self::Happy),
            "calm" => Some(Self::Calm),
            "energetic" => Some(Self::Energetic),
            "productive" => Some(Self::Productive),
            "creative" => Some(Self::Creative),
            _ => None,
        }
    }

    /// Returns the display color hex derived from this mood.
    pub fn color(self) -> &'static str {
        match self {
            Self::Happy => "#FFD700",
            Self::Calm => "#87CEEB",
            Self::Energetic => "#FF4500",
            Self::Productive => "#32CD32",
            Self::Creative => "#FF1493",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation error for thought construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThoughtValidationError {
    /// Text is empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for ThoughtValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "thought text cannot be empty"),
        }
    }
}

impl Error for ThoughtValidationError {}

/// Canonical record for one captured thought.
///
/// Thoughts are immutable after creation: they are created once, removed by
/// id, and never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thought {
    /// Stable global id used for removal and display.
    pub id: ThoughtId,
    /// User-supplied text, trimmed, guaranteed non-empty.
    pub text: String,
    /// Mood tag assigned at capture time.
    pub mood: Mood,
    /// Capture timestamp.
    pub created_at: DateTime<Utc>,
}

impl Thought {
    /// Creates a thought with a fresh id and the current timestamp.
    ///
    /// # Errors
    /// - `ThoughtValidationError::EmptyText` when `text` trims to nothing.
    pub fn new(text: impl Into<String>, mood: Mood) -> Result<Self, ThoughtValidationError> {
        Self::with_id(Uuid::new_v4(), text, mood)
    }

    /// Creates a thought with a caller-provided stable id.
    ///
    /// Used by persistence load paths where identity already exists.
    pub fn with_id(
        id: ThoughtId,
        text: impl Into<String>,
        mood: Mood,
    ) -> Result<Self, ThoughtValidationError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(ThoughtValidationError::EmptyText);
        }
        Ok(Self {
            id,
            text,
            mood,
            created_at: Utc::now(),
        })
    }

    /// Returns the display color derived from this thought's mood.
    pub fn color(&self) -> &'static str {
        self.mood.color()
    }
}

#[cfg(test)]
mod tests {
    use super::{Mood, Thought, ThoughtValidationError, ALL_MOODS};

    #[test]
    fn mood_name_round_trips_through_parse() {
        for mood in ALL_MOODS {
            assert_eq!(Mood::parse(mood.as_str()), Some(mood));
        }
        assert_eq!(Mood::parse("melancholic"), None);
        assert_eq!(Mood::parse("Happy"), None);
    }

    #[test]
    fn default_mood_is_calm() {
        assert_eq!(Mood::default(), Mood::Calm);
    }

    #[test]
    fn color_is_determined_by_mood() {
        let first = Thought::new("same mood", Mood::Creative).unwrap();
        let second = Thought::new("other text", Mood::Creative).unwrap();
        assert_eq!(first.color(), second.color());
        assert_eq!(first.color(), "#FF1493");
    }

    #[test]
    fn new_trims_text_and_rejects_whitespace_only_input() {
        let thought = Thought::new("  keep the middle  ", Mood::Calm).unwrap();
        assert_eq!(thought.text, "keep the middle");

        assert_eq!(
            Thought::new("   \t\n", Mood::Calm).unwrap_err(),
            ThoughtValidationError::EmptyText
        );
        assert_eq!(
            Thought::new("", Mood::Happy).unwrap_err(),
            ThoughtValidationError::EmptyText
        );
    }

    #[test]
    fn fresh_thoughts_get_distinct_ids() {
        let first = Thought::new("one", Mood::Happy).unwrap();
        let second = Thought::new("one", Mood::Happy).unwrap();
        assert_ne!(first.id, second.id);
    }
}
