//! Request and response bodies of the JSON boundary.

use crate::game::WordEntry;
use serde::{Deserialize, Serialize};

/// `POST /game/start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {
    pub round: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    pub words: Vec<WordEntry>,
}

/// `POST /game/check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    pub word: String,
    pub target_word: String,
}

pub use crate::game::GuessResponse;

/// `GET /word?len=N`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResponse {
    pub word: String,
}

/// `POST /check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub is_valid: bool,
}

/// Body of every error reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
