//! Lingo word representation
//!
//! A Word stores the normalized (uppercased) text together with its characters.
//! Length is always counted in characters, never bytes: Turkish letters such as
//! `Ş` or `İ` take two bytes in UTF-8 but occupy a single tile on the board.

use std::fmt;

/// A normalized word
///
/// Construction never fails: arbitrary player input is accepted and scored.
/// Use [`Word::parse`] where only real words are acceptable (dictionary data).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for strings that cannot be dictionary words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// Uppercase a single character
///
/// Turkish distinguishes dotted and dotless i, so `i` maps to `İ` and `ı` to `I`.
/// Everything else follows the Unicode default mapping.
fn push_upper(out: &mut String, ch: char) {
    match ch {
        'i' => out.push('İ'),
        'ı' => out.push('I'),
        _ => out.extend(ch.to_uppercase()),
    }
}

/// Uppercase a string with Turkish i/ı rules
///
/// # Examples
/// ```
/// use lingo::core::to_upper;
///
/// assert_eq!(to_upper("kitap"), "KİTAP");
/// assert_eq!(to_upper("kırmızı"), "KIRMIZI");
/// ```
#[must_use]
pub fn to_upper(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_upper(&mut out, ch);
    }
    out
}

/// Lowercase a string with Turkish i/ı rules (inverse of [`to_upper`])
#[must_use]
pub fn to_lower(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'İ' => out.push('i'),
            'I' => out.push('ı'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

impl Word {
    /// Create a Word from arbitrary input, uppercasing it
    ///
    /// # Examples
    /// ```
    /// use lingo::core::Word;
    ///
    /// let word = Word::new("kitap");
    /// assert_eq!(word.text(), "KİTAP");
    /// assert_eq!(word.len(), 5);
    /// ```
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = to_upper(text.as_ref());
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Create a Word that is fit to be stored in a dictionary
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed input is empty or contains
    /// anything other than alphabetic characters.
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = trimmed.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self::new(trimmed))
    }

    /// Get the normalized text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the characters in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The first character, shown to the player as a clue
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> Option<char> {
        self.chars.first().copied()
    }

    /// Consume the word, returning its normalized text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
