//! Guess check command

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::{GuessResponse, score_words};

/// A scored guess with its normalized inputs
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub response: GuessResponse,
}

/// Score `guess` against `target`
#[must_use]
pub fn check_guess(guess: &str, target: &str, dictionary: &Dictionary) -> CheckResult {
    let guess = Word::new(guess);
    let target = Word::new(target);
    let response = score_words(&guess, &target, dictionary);
    CheckResult {
        guess,
        target,
        response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_normalizes_inputs() {
        let dictionary = Dictionary::from_words(["kitap"]);
        let result = check_guess("kitap", "Kitap", &dictionary);
        assert_eq!(result.guess.text(), "KİTAP");
        assert_eq!(result.target.text(), "KİTAP");
        assert!(result.response.is_correct);
        assert!(result.response.is_valid);
    }
}
