//! Keyboard colouring
//!
//! Tracks the strongest verdict seen for every letter across the guesses made
//! on one word, the way the on-screen keyboard shows it.

use super::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;

/// Best verdict per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatuses {
    statuses: FxHashMap<char, Verdict>,
}

impl LetterStatuses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the statuses
    ///
    /// A letter never goes down: once `Correct` it stays `Correct`, and a
    /// `Present` letter is not demoted by a later `Absent` duplicate.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.chars().iter().zip(feedback.verdicts()) {
            self.statuses
                .entry(letter)
                .and_modify(|current| *current = (*current).max(verdict))
                .or_insert(verdict);
        }
    }

    /// Status of a letter, `None` if it was never played
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        self.statuses.get(&letter).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
