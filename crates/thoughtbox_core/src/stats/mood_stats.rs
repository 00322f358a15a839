//! Mood frequency aggregation.
//!
//! # Responsibility
//! - Count thoughts per mood and normalize counts for bar-chart rendering.
//!
//! # Invariants
//! - Moods with zero thoughts are absent from the counts, not zero-valued.
//! - Bar heights are normalized to 0-100% of the largest count.
//! - All functions are pure; iteration order is deterministic mood order.

use crate::model::thought::{Mood, Thought};
use std::collections::BTreeMap;

/// One rendered bar of the mood frequency chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBar {
    pub mood: Mood,
    pub count: usize,
    /// Bar height as a percentage of the largest count, 1-100.
    pub height_pct: u32,
    /// Display color derived from the mood.
    pub color: &'static str,
}

/// Counts thoughts per mood. Only moods present in at least one thought
/// appear in the result.
pub fn counts_by_mood(thoughts: &[Thought]) -> BTreeMap<Mood, usize> {
    let mut counts = BTreeMap::new();
    for thought in thoughts {
        *counts.entry(thought.mood).or_insert(0) += 1;
    }
    counts
}

/// Returns the largest count across present moods, or `None` for an empty
/// journal. The caller decides how to render the no-data case.
pub fn max_count(counts: &BTreeMap<Mood, usize>) -> Option<usize> {
    counts.values().copied().max()
}

/// Shapes counts into chart bars with heights normalized against the max.
///
/// An empty journal yields an empty chart rather than an undefined maximum.
pub fn chart_bars(counts: &BTreeMap<Mood, usize>) -> Vec<ChartBar> {
    let Some(max) = max_count(counts) else {
        return Vec::new();
    };

    counts
        .iter()
        .map(|(&mood, &count)| ChartBar {
            mood,
            count,
            height_pct: (count * 100 / max) as u32,
            color: mood.color(),
        })
        .collect()
}
