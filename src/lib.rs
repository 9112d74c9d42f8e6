//! Lingo Türkiye
//!
//! Word-guessing game engine for Turkish words of varying length: round word
//! selection, two-pass guess scoring, a timed single-player session with a
//! final, and a JSON boundary for serving it all.
//!
//! # Quick Start
//!
//! ```rust
//! use lingo::core::{Feedback, Verdict, Word};
//!
//! let guess = Word::new("elmas");
//! let target = Word::new("masal");
//!
//! let feedback = Feedback::calculate(&guess, &target).unwrap();
//! assert_eq!(feedback.verdicts()[3], Verdict::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word buckets
pub mod dictionary;

pub mod error;

// Round selection, scoring and sessions
pub mod game;

// JSON request/response boundary
pub mod api;

pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
