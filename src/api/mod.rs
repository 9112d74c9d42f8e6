//! JSON boundary
//!
//! Typed handlers for every game route and a dispatcher that turns a
//! `(method, path, body)` triple into a status code and JSON body. Any HTTP
//! server can sit in front of [`GameService::dispatch`]; the service itself
//! does no I/O.

mod router;
pub mod types;

pub use router::{ApiReply, Method};
pub use types::{
    ErrorBody, GuessRequest, GuessResponse, StartRequest, StartResponse, ValidateRequest,
    ValidateResponse, WordResponse,
};

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::{score_guess, select_round_words};
use rand::Rng;
use std::sync::Arc;

/// Stateless game handlers over a shared dictionary
#[derive(Debug, Clone)]
pub struct GameService {
    dictionary: Arc<Dictionary>,
}

impl GameService {
    #[must_use]
    pub const fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Draw the words of a round using the thread-local RNG
    ///
    /// # Errors
    /// `GameError::InvalidRound` or `GameError::InsufficientWords`.
    pub fn start(&self, request: &StartRequest) -> Result<StartResponse, GameError> {
        self.start_with(request, &mut rand::rng())
    }

    /// Draw the words of a round with the given RNG
    ///
    /// # Errors
    /// `GameError::InvalidRound` or `GameError::InsufficientWords`.
    pub fn start_with<R: Rng + ?Sized>(
        &self,
        request: &StartRequest,
        rng: &mut R,
    ) -> Result<StartResponse, GameError> {
        let words = select_round_words(request.round, &self.dictionary, rng)?;
        Ok(StartResponse { words })
    }

    /// Score a guess; never fails
    #[must_use]
    pub fn check(&self, request: &GuessRequest) -> GuessResponse {
        score_guess(&request.word, &request.target_word, &self.dictionary)
    }

    /// One random word of the given length
    ///
    /// # Errors
    /// `GameError::NoWordsOfLength` if the dictionary has none.
    pub fn random_word(&self, length: usize) -> Result<WordResponse, GameError> {
        let word = self.dictionary.random_word(length, &mut rand::rng())?;
        Ok(WordResponse {
            word: word.to_string(),
        })
    }

    /// Dictionary membership for a single word
    ///
    /// # Errors
    /// `GameError::EmptyWord` for an empty or blank word.
    pub fn validate(&self, request: &ValidateRequest) -> Result<ValidateResponse, GameError> {
        let word = request.word.trim();
        if word.is_empty() {
            return Err(GameError::EmptyWord);
        }
        Ok(ValidateResponse {
            is_valid: self.dictionary.contains(&Word::new(word)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service() -> GameService {
        GameService::new(Arc::new(Dictionary::from_words([
            "elma", "kapı", "masa", "kitap", "masal", "elmas", "yaprak", "toprak", "karpuz",
        ])))
    }

    #[test]
    fn start_returns_round_words() {
        let mut rng = StdRng::seed_from_u64(5);
        let response = service()
            .start_with(&StartRequest { round: 2 }, &mut rng)
            .unwrap();
        assert_eq!(response.words.len(), 6);
        assert!(response.words[..3].iter().all(|w| w.length == 5));
        assert!(response.words[3..].iter().all(|w| w.length == 6));
    }

    #[test]
    fn start_rejects_bad_round() {
        let err = service().start(&StartRequest { round: 3 }).unwrap_err();
        assert_eq!(err, GameError::InvalidRound(3));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn check_scores_guess() {
        let response = service().check(&GuessRequest {
            word: "masal".into(),
            target_word: "ELMAS".into(),
        });
        assert_eq!(response.result[3], Verdict::Correct);
        assert!(response.is_valid);
        assert!(!response.is_correct);
    }

    #[test]
    fn random_word_has_requested_length() {
        let service = service();
        let response = service.random_word(6).unwrap();
        assert_eq!(response.word.chars().count(), 6);
        assert_eq!(service.random_word(9), Err(GameError::NoWordsOfLength(9)));
    }

    #[test]
    fn validate_checks_membership() {
        let service = service();
        let valid = |word: &str| {
            service
                .validate(&ValidateRequest { word: word.into() })
                .map(|r| r.is_valid)
        };
        assert_eq!(valid("kapı"), Ok(true));
        assert_eq!(valid("KİTAP"), Ok(true));
        assert_eq!(valid("bulut"), Ok(false));
        assert_eq!(valid("  "), Err(GameError::EmptyWord));
    }
}
