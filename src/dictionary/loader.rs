//! Dictionary loading utilities
//!
//! Supports the JSON layout served by the game backend (`{"4": [...], ...}`)
//! and plain word files with one word per line.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dictionary key '{0}' is not a word length")]
    InvalidLengthKey(String),
}

/// Load a dictionary from a file
///
/// Files ending in `.json` are parsed as a length-keyed object; anything else
/// is read as one word per line, blank lines and `#` comments ignored.
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read or its JSON is invalid.
///
/// # Examples
/// ```no_run
/// use lingo::dictionary::load_from_file;
///
/// let dictionary = load_from_file("data/words.json").unwrap();
/// println!("Loaded {} words", dictionary.total_words());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let dictionary = if is_json {
        Dictionary::from_json_str(&content)?
    } else {
        from_lines(&content)
    };

    info!(
        path = %path.display(),
        words = dictionary.total_words(),
        lengths = ?dictionary.lengths().collect::<Vec<_>>(),
        "Dictionary loaded"
    );
    Ok(dictionary)
}

/// Build a dictionary from text with one word per line
#[must_use]
pub fn from_lines(content: &str) -> Dictionary {
    Dictionary::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}
