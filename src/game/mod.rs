//! Game logic
//!
//! The two pure operations (round selection and guess scoring) plus the
//! single-player session built on top of them.

pub mod round;
pub mod scorer;
pub mod session;

pub use round::{BucketRequirement, Round, WORDS_PER_BUCKET, WordEntry, draw_round, select_round_words};
pub use scorer::{GuessResponse, score_guess, score_words};
pub use session::{
    Attempt, BurnReason, CompletedWord, GameSession, GuessOutcome, Phase, Reward, SessionRules,
};
