//! Error types for game operations.
//!
//! Client mistakes (bad round number, unknown word length) are kept apart from
//! data-integrity faults (a dictionary bucket too small to draw from) so the
//! boundary can map them to the right status code.

use thiserror::Error;

/// Errors raised by the selector, the dictionary and game sessions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Round outside {1, 2}
    #[error("Invalid round number: {0}")]
    InvalidRound(i64),

    /// A dictionary bucket holds fewer words than a round needs
    #[error("Dictionary has {available} words of length {length}, {required} required")]
    InsufficientWords {
        length: usize,
        required: usize,
        available: usize,
    },

    /// No words of the requested length
    #[error("No words of length {0}")]
    NoWordsOfLength(usize),

    /// Empty word submitted for validation
    #[error("Word must not be empty")]
    EmptyWord,

    /// Session action not allowed in the current state
    #[error("Invalid action: {0}")]
    InvalidAction(&'static str),
}

impl GameError {
    /// HTTP status code for this error at the boundary
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRound(_) | Self::EmptyWord | Self::InvalidAction(_) => 400,
            Self::NoWordsOfLength(_) => 404,
            Self::InsufficientWords { .. } => 500,
        }
    }

    /// Whether the caller is at fault (as opposed to the loaded data)
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
