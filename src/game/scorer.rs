//! Guess scoring
//!
//! Wraps [`Feedback::calculate`] with normalization, the dictionary validity
//! check and the length-mismatch policy.

use crate::core::{Feedback, Verdict, Word};
use crate::dictionary::Dictionary;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scored guess as returned to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResponse {
    /// One verdict per position, empty when the lengths differ
    pub result: Vec<Verdict>,
    /// Whether the guess is a dictionary word
    pub is_valid: bool,
    /// Whether the guess equals the target
    pub is_correct: bool,
}

impl GuessResponse {
    /// Response for a guess whose length differs from the target
    #[must_use]
    pub const fn length_mismatch() -> Self {
        Self {
            result: Vec::new(),
            is_valid: false,
            is_correct: false,
        }
    }

    /// The verdicts as `Feedback`
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        Feedback::new(self.result.clone())
    }
}

/// Score a raw guess against a raw target
///
/// Both strings are uppercased first, so case never matters. A guess of a
/// different length is not an error: it yields an empty result with both
/// flags false.
///
/// # Examples
/// ```
/// use lingo::dictionary::Dictionary;
/// use lingo::game::score_guess;
///
/// let dictionary = Dictionary::from_words(["kitap"]);
/// let response = score_guess("kitap", "KİTAP", &dictionary);
/// assert!(response.is_valid);
/// assert!(response.is_correct);
///
/// let mismatch = score_guess("elma", "kitap", &dictionary);
/// assert!(mismatch.result.is_empty());
/// ```
#[must_use]
pub fn score_guess(guess: &str, target: &str, dictionary: &Dictionary) -> GuessResponse {
    score_words(&Word::new(guess), &Word::new(target), dictionary)
}

/// Score an already normalized guess against a normalized target
#[must_use]
pub fn score_words(guess: &Word, target: &Word, dictionary: &Dictionary) -> GuessResponse {
    let Some(feedback) = Feedback::calculate(guess, target) else {
        debug!(
            guess = %guess,
            guess_len = guess.len(),
            target_len = target.len(),
            "Guess length mismatch"
        );
        return GuessResponse::length_mismatch();
    };

    let is_valid = dictionary.contains(guess);
    let is_correct = guess == target;

    debug!(guess = %guess, feedback = %feedback, is_valid, is_correct, "Guess scored");

    GuessResponse {
        result: feedback.into_verdicts(),
        is_valid,
        is_correct,
    }
}
