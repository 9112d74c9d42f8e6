//! Lingo feedback calculation and representation
//!
//! Feedback is the ordered list of verdicts for one guess against one target.
//! Unlike classic Wordle the word length is not fixed: rounds mix 4, 5 and 6
//! letter words and the final goes up to 7.

use super::{Verdict, Word};
use std::fmt;

/// Verdicts for a scored guess, one per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Wrap an existing verdict sequence
    #[must_use]
    pub const fn new(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Returns `None` if the words differ in length.
    ///
    /// # Algorithm
    /// 1. First pass: every exact position match is `Correct`; both characters
    ///    are consumed so they cannot take part in the second pass.
    /// 2. Second pass: each pending position, left to right, is `Present` if its
    ///    letter is still among the unconsumed target characters. The first such
    ///    occurrence is consumed. Otherwise it is `Absent`.
    ///
    /// The first pass must finish before the second starts: a letter matched
    /// exactly anywhere in the word is no longer available to a later position.
    ///
    /// # Examples
    /// ```
    /// use lingo::core::{Feedback, Word};
    ///
    /// let guess = Word::new("masal");
    /// let target = Word::new("elmas");
    /// let feedback = Feedback::calculate(&guess, &target).unwrap();
    ///
    /// // M(present) A(absent) S(present) A(correct) L(present)
    /// assert_eq!(feedback.to_code(), "Y-YGY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Option<Self> {
        if guess.len() != target.len() {
            return None;
        }

        let mut target_pool: Vec<Option<char>> = target.chars().iter().copied().map(Some).collect();
        let mut guess_pool: Vec<Option<char>> = guess.chars().iter().copied().map(Some).collect();
        let mut result: Vec<Option<Verdict>> = vec![None; guess.len()];

        // First pass: exact matches
        #[allow(clippy::needless_range_loop)]
        for i in 0..guess_pool.len() {
            if guess_pool[i] == target_pool[i] {
                result[i] = Some(Verdict::Correct);
                target_pool[i] = None;
                guess_pool[i] = None;
            }
        }

        // Second pass: presence among what is left
        for (slot, &letter) in result.iter_mut().zip(&guess_pool) {
            if slot.is_some() {
                continue;
            }
            let found = letter.and_then(|letter| {
                target_pool
                    .iter()
                    .position(|&remaining| remaining == Some(letter))
            });
            *slot = Some(match found {
                Some(index) => {
                    target_pool[index] = None;
                    Verdict::Present
                }
                None => Verdict::Absent,
            });
        }

        Some(Self(result.into_iter().flatten().collect()))
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[must_use]
    pub fn into_verdicts(self) -> Vec<Verdict> {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Letter code string such as "GY-GY"
    #[must_use]
    pub fn to_code(&self) -> String {
        self.0.iter().map(|v| v.code()).collect()
    }

    /// Emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

impl From<Feedback> for Vec<Verdict> {
    fn from(feedback: Feedback) -> Self {
        feedback.0
    }
}
