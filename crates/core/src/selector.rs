//! Best-item selection over the items matched by one binding.
//!
//! Two regimes, picked per call:
//! - any torch among the matches: only torches count, lowest HP wins
//!   (burn the most worn torch first);
//! - otherwise: most loaded rounds wins, ties go to the earliest pattern.
//!
//! Ties within a regime resolve to the first candidate encountered.

use std::cmp::Reverse;

use crate::types::{GearInfo, GearPattern, SlotHint};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate<'a, I> {
    pub info: &'a GearInfo<I>,
    pub slot: SlotHint,
    /// Index of the pattern that matched, in binding order.
    pub priority: usize,
}

impl<I> Candidate<'_, I> {
    pub fn rounds(&self) -> u32 {
        self.info.rounds_in_clip.unwrap_or(0)
    }

    pub fn is_torch(&self) -> bool {
        is_torch(&self.info.name)
    }
}

pub fn is_torch(name: &str) -> bool {
    name.to_lowercase().contains("torch")
}

/// One candidate per (pattern, matching item) pair, in pattern order then inventory order.
/// An item matched by several patterns appears once per pattern.
pub fn collect_candidates<'a, I>(
    patterns: &[GearPattern],
    items: &'a [GearInfo<I>],
) -> Vec<Candidate<'a, I>> {
    patterns
        .iter()
        .enumerate()
        .flat_map(|(priority, pattern)| {
            items
                .iter()
                .filter(|info| pattern.matches(&info.name))
                .map(move |info| Candidate { info, slot: pattern.slot, priority })
        })
        .collect()
}

pub fn select_best<'c, 'a, I>(
    candidates: &'c [Candidate<'a, I>],
) -> Option<&'c Candidate<'a, I>> {
    if candidates.iter().any(Candidate::is_torch) {
        // `min_by` keeps the first of equal elements. NaN HP never wins.
        candidates
            .iter()
            .filter(|c| c.is_torch() && !c.info.hp.is_nan())
            .min_by(|a, b| a.info.hp.total_cmp(&b.info.hp))
    } else {
        candidates.iter().min_by_key(|c| (Reverse(c.rounds()), c.priority))
    }
}
