//! Round word selection
//!
//! Each classic round hands the player six words: three of a shorter length
//! followed by three of a longer one.

use crate::dictionary::Dictionary;
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Words drawn from each bucket a round uses
pub const WORDS_PER_BUCKET: usize = 3;

/// A classic-mode round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Round {
    /// Four and five letter words
    First,
    /// Five and six letter words
    Second,
}

/// How many words of one length a round needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketRequirement {
    pub length: usize,
    pub count: usize,
}

impl Round {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Parse a round number
    ///
    /// # Errors
    /// Returns `GameError::InvalidRound` for anything but 1 or 2.
    pub const fn from_number(number: i64) -> Result<Self, GameError> {
        match number {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            _ => Err(GameError::InvalidRound(number)),
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    /// Buckets this round draws from, shorter length first
    #[must_use]
    pub const fn requirements(self) -> [BucketRequirement; 2] {
        let (short, long) = match self {
            Self::First => (4, 5),
            Self::Second => (5, 6),
        };
        [
            BucketRequirement {
                length: short,
                count: WORDS_PER_BUCKET,
            },
            BucketRequirement {
                length: long,
                count: WORDS_PER_BUCKET,
            },
        ]
    }

    /// Total words handed out in this round
    #[must_use]
    pub fn word_count(self) -> usize {
        self.requirements().iter().map(|r| r.count).sum()
    }
}

impl TryFrom<i64> for Round {
    type Error = GameError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}

/// A word handed to the player for a round
///
/// The full word is included alongside the clue (length and first letter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub length: usize,
    pub word: String,
    pub first_letter: char,
}

impl WordEntry {
    /// Build an entry for a dictionary word, `None` for an empty string
    #[must_use]
    pub fn new(word: &str) -> Option<Self> {
        let first_letter = word.chars().next()?;
        Some(Self {
            length: word.chars().count(),
            word: word.to_string(),
            first_letter,
        })
    }
}

/// Select the words for a round given its number
///
/// # Errors
/// Returns `GameError::InvalidRound` if `round` is not 1 or 2, and
/// `GameError::InsufficientWords` if a bucket is too small.
pub fn select_round_words<R: Rng + ?Sized>(
    round: i64,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<Vec<WordEntry>, GameError> {
    draw_round(Round::from_number(round)?, dictionary, rng)
}

/// Draw a round's words
///
/// Every bucket is sampled uniformly without replacement. Groups are returned
/// in the round's fixed order, shorter length first.
///
/// # Errors
/// Returns `GameError::InsufficientWords` if a bucket has fewer words than
/// the round needs.
pub fn draw_round<R: Rng + ?Sized>(
    round: Round,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<Vec<WordEntry>, GameError> {
    let mut entries = Vec::with_capacity(round.word_count());

    for requirement in round.requirements() {
        let bucket = dictionary.bucket(requirement.length);
        if bucket.len() < requirement.count {
            let err = GameError::InsufficientWords {
                length: requirement.length,
                required: requirement.count,
                available: bucket.len(),
            };
            error!(round = round.number(), error = %err, "Cannot draw round words");
            return Err(err);
        }

        // Buckets never hold empty words, so every entry builds
        entries.extend(
            bucket
                .choose_multiple(rng, requirement.count)
                .filter_map(|word| WordEntry::new(word)),
        );
    }

    info!(round = round.number(), words = entries.len(), "Round words drawn");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn dictionary() -> Dictionary {
        Dictionary::from_words([
            "elma", "kapı", "masa", "okul", "kale", //
            "kitap", "masal", "elmas", "armut", "deniz", //
            "yaprak", "toprak", "karpuz", "bardak",
        ])
    }

    #[test]
    fn round_from_number() {
        assert_eq!(Round::from_number(1), Ok(Round::First));
        assert_eq!(Round::from_number(2), Ok(Round::Second));
        assert_eq!(Round::from_number(3), Err(GameError::InvalidRound(3)));
        assert_eq!(Round::try_from(0_i64), Err(GameError::InvalidRound(0)));
        assert_eq!(Round::try_from(-1_i64), Err(GameError::InvalidRound(-1)));
    }

    #[test]
    fn round_requirements_table() {
        let lengths = |round: Round| round.requirements().map(|r| (r.length, r.count));
        assert_eq!(lengths(Round::First), [(4, 3), (5, 3)]);
        assert_eq!(lengths(Round::Second), [(5, 3), (6, 3)]);
        assert_eq!(Round::First.word_count(), 6);
    }

    #[test]
    fn select_returns_six_entries_in_length_order() {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(42);

        for (number, expected) in [(1, [4, 4, 4, 5, 5, 5]), (2, [5, 5, 5, 6, 6, 6])] {
            let words = select_round_words(number, &dictionary, &mut rng).unwrap();
            let lengths: Vec<usize> = words.iter().map(|w| w.length).collect();
            assert_eq!(lengths, expected);
        }
    }

    #[test]
    fn select_entries_are_consistent() {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            for entry in select_round_words(2, &dictionary, &mut rng).unwrap() {
                assert_eq!(entry.word.chars().count(), entry.length);
                assert_eq!(entry.word.chars().next(), Some(entry.first_letter));
                assert!(dictionary.bucket(entry.length).contains(&entry.word));
            }
        }
    }

    #[test]
    fn select_samples_without_replacement() {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..50 {
            let words = select_round_words(1, &dictionary, &mut rng).unwrap();
            let distinct: FxHashSet<&str> = words.iter().map(|w| w.word.as_str()).collect();
            assert_eq!(distinct.len(), words.len());
        }
    }

    #[test]
    fn select_eventually_uses_whole_bucket() {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            for entry in select_round_words(1, &dictionary, &mut rng).unwrap() {
                if entry.length == 4 {
                    seen.insert(entry.word);
                }
            }
        }
        assert_eq!(seen.len(), dictionary.bucket(4).len());
    }

    #[test]
    fn select_invalid_round() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select_round_words(3, &dictionary(), &mut rng),
            Err(GameError::InvalidRound(3))
        );
    }

    #[test]
    fn select_insufficient_words() {
        let dictionary = Dictionary::from_words(["elma", "kapı", "kitap", "masal", "elmas"]);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            select_round_words(1, &dictionary, &mut rng),
            Err(GameError::InsufficientWords {
                length: 4,
                required: 3,
                available: 2,
            })
        );
    }

    #[test]
    fn select_missing_bucket() {
        let dictionary = Dictionary::from_words(["kitap", "masal", "elmas"]);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            select_round_words(2, &dictionary, &mut rng),
            Err(GameError::InsufficientWords { length: 6, available: 0, .. })
        ));
    }

    #[test]
    fn word_entry_serializes_first_letter_as_string() {
        let entry = WordEntry::new("ÇANTA").unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"length": 5, "word": "ÇANTA", "first_letter": "Ç"})
        );
        assert!(WordEntry::new("").is_none());
    }
}
