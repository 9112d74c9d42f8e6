//! Round start command

use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::{Round, WordEntry, select_round_words};

/// Words drawn for a round
pub struct StartResult {
    pub round: Round,
    pub words: Vec<WordEntry>,
}

/// Draw the words for a round
///
/// # Errors
///
/// Returns `GameError::InvalidRound` or `GameError::InsufficientWords`.
pub fn start_round(round: i64, dictionary: &Dictionary) -> Result<StartResult, GameError> {
    let words = select_round_words(round, dictionary, &mut rand::rng())?;
    Ok(StartResult {
        round: Round::from_number(round)?,
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_round_with_embedded_dictionary() {
        let dictionary = Dictionary::embedded();
        let result = start_round(1, &dictionary).unwrap();
        assert_eq!(result.round, Round::First);
        assert_eq!(result.words.len(), 6);
    }

    #[test]
    fn start_round_rejects_bad_round() {
        let dictionary = Dictionary::embedded();
        assert!(matches!(
            start_round(0, &dictionary),
            Err(GameError::InvalidRound(0))
        ));
    }
}
