//! The game dictionary
//!
//! An immutable mapping from word length to the ordered list of words of that
//! length. It is built once at start-up and then only ever shared by reference.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{DictionaryError, load_from_file};

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use tracing::warn;

/// Read-only word buckets keyed by length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    buckets: BTreeMap<usize, Vec<String>>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from explicit buckets
    ///
    /// Words are normalized. A word whose length disagrees with its bucket, an
    /// invalid word, or a repeat of an earlier word is skipped with a warning;
    /// bucket order is otherwise preserved.
    #[must_use]
    pub fn from_buckets<I, W>(buckets: I) -> Self
    where
        I: IntoIterator<Item = (usize, Vec<W>)>,
        W: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for (length, words) in buckets {
            for raw in words {
                let raw = raw.as_ref();
                match Word::parse(raw) {
                    Ok(word) if word.len() == length => dictionary.insert(word),
                    Ok(word) => warn!(
                        word = %word,
                        bucket = length,
                        actual = word.len(),
                        "Skipping word filed under the wrong length"
                    ),
                    Err(e) => warn!(word = raw, error = %e, "Skipping invalid dictionary word"),
                }
            }
        }
        dictionary
    }

    /// Build a dictionary from a flat list, bucketing by character length
    ///
    /// Invalid entries are skipped silently, like blank lines in a word file.
    ///
    /// # Examples
    /// ```
    /// use lingo::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["elma", "masal", "kitap"]);
    /// assert_eq!(dictionary.bucket(5), ["MASAL", "KİTAP"]);
    /// ```
    #[must_use]
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words.into_iter().filter_map(|w| Word::parse(w.as_ref()).ok()) {
            dictionary.insert(word);
        }
        dictionary
    }

    /// Parse a JSON object keyed by decimal word length
    ///
    /// ```json
    /// { "4": ["ELMA", "KAPI"], "5": ["MASAL"] }
    /// ```
    ///
    /// # Errors
    /// Returns `DictionaryError` if the JSON is malformed or a key is not a
    /// positive integer.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;

        let mut buckets = Vec::with_capacity(raw.len());
        for (key, words) in raw {
            let length = key
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&len| len > 0)
                .ok_or_else(|| DictionaryError::InvalidLengthKey(key.clone()))?;
            buckets.push((length, words));
        }

        Ok(Self::from_buckets(buckets))
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    fn insert(&mut self, word: Word) {
        if self.lookup.contains(word.text()) {
            return;
        }
        let length = word.len();
        let text = word.into_text();
        self.lookup.insert(text.clone());
        self.buckets.entry(length).or_default().push(text);
    }

    /// Words of the given length, empty if there are none
    #[must_use]
    pub fn bucket(&self, length: usize) -> &[String] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Membership test for an already normalized word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word.text())
    }

    /// Lengths that have at least one word, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.lookup.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Draw one word of the given length uniformly at random
    ///
    /// # Errors
    /// Returns `GameError::NoWordsOfLength` if the bucket is empty or absent.
    pub fn random_word<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<&str, GameError> {
        self.bucket(length)
            .choose(rng)
            .map(String::as_str)
            .ok_or(GameError::NoWordsOfLength(length))
    }
}
