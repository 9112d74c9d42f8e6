//! Core domain types for Lingo
//!
//! Words, verdicts and feedback. Everything here is pure and has no notion of
//! dictionaries or game flow.

mod feedback;
mod keyboard;
mod verdict;
mod word;

pub use feedback::Feedback;
pub use keyboard::LetterStatuses;
pub use verdict::Verdict;
pub use word::{Word, WordError, to_lower, to_upper};
