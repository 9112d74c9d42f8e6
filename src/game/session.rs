//! Single-player game flow
//!
//! A session plays both classic rounds (twelve words, scored with a shrinking
//! per-word value) and then the final, where one word at a time is played at
//! stages of four to seven letters against a total clock.
//!
//! Sessions live in the front-end that created them. Time is always passed in
//! explicitly so the flow can be driven deterministically.

use super::round::{Round, WordEntry, draw_round};
use super::scorer::{GuessResponse, score_words};
use crate::core::{LetterStatuses, Word};
use crate::dictionary::Dictionary;
use crate::error::GameError;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// First word length played in the final
pub const FIRST_FINAL_STAGE: usize = 4;
/// Last word length played in the final
pub const LAST_FINAL_STAGE: usize = 7;

/// Timing and attempt limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRules {
    /// Guesses allowed per word
    pub max_attempts: usize,
    /// Time allowed per classic word row, `None` for no limit
    pub row_time_limit: Option<Duration>,
    /// Total time for the final
    pub final_time_limit: Duration,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            row_time_limit: Some(Duration::from_secs(15)),
            final_time_limit: Duration::from_secs(120),
        }
    }
}

/// Points a classic word starts at and loses per wrong guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordScoring {
    pub base: u32,
    pub penalty: u32,
}

/// Scoring for a word of the given length
#[must_use]
pub const fn scoring_for(length: usize) -> WordScoring {
    if length == 4 {
        WordScoring {
            base: 1000,
            penalty: 100,
        }
    } else {
        WordScoring {
            base: 2000,
            penalty: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Classic,
    /// Classic words exhausted, final not started yet
    AwaitingFinal,
    Final,
    Finished,
}

/// Why a word was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnReason {
    /// The guess was not a dictionary word
    InvalidWord,
    OutOfAttempts,
    Timeout,
}

/// Prize for clearing a final stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub stage: usize,
    pub points: u32,
    pub grand_prize: bool,
}

impl Reward {
    /// Reward for clearing `stage` with `banked` classic points
    #[must_use]
    pub const fn for_stage(stage: usize, banked: u32) -> Self {
        let points = match stage {
            4 => banked / 2,
            5 => banked,
            _ => banked.saturating_mul(2),
        };
        Self {
            stage,
            points,
            grand_prize: stage >= LAST_FINAL_STAGE,
        }
    }
}

/// One scored guess on the current word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub response: GuessResponse,
}

/// A classic word that is no longer in play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedWord {
    pub entry: WordEntry,
    pub attempts: Vec<Attempt>,
    pub points: u32,
    pub solved: bool,
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong length; nothing recorded
    Rejected { expected: usize, got: usize },
    /// Scored, not solved, attempts remain
    Wrong {
        response: GuessResponse,
        attempts_left: usize,
    },
    /// Classic word solved and its remaining value banked
    Solved { response: GuessResponse, points: u32 },
    /// Word lost. In the classic rounds play moves on; in the final a new
    /// word of the same stage replaces it.
    Burned {
        response: Option<GuessResponse>,
        reason: BurnReason,
        answer: String,
    },
    /// Final stage cleared, next stage starts
    StageCleared {
        response: GuessResponse,
        reward: Reward,
    },
    /// Last final stage cleared
    GameWon {
        response: GuessResponse,
        reward: Reward,
    },
    /// Final clock ran out
    TimeUp { answer: String },
    /// No word in play
    Inactive,
}

/// A single player's game
///
/// Each classic round is drawn on its own, so a five-letter word may appear
/// in both rounds of one session.
pub struct GameSession<'d, R: Rng> {
    dictionary: &'d Dictionary,
    rules: SessionRules,
    rng: R,
    phase: Phase,
    words: Vec<WordEntry>,
    index: usize,
    attempts: Vec<Attempt>,
    completed: Vec<CompletedWord>,
    total_score: u32,
    word_score: u32,
    row_started: Instant,
    final_stage: usize,
    final_deadline: Option<Instant>,
    last_reward: Option<Reward>,
}

impl<'d, R: Rng> GameSession<'d, R> {
    /// Start a session: both classic rounds are drawn up front
    ///
    /// # Errors
    /// Returns `GameError::InsufficientWords` if the dictionary cannot supply
    /// either round.
    pub fn new(
        dictionary: &'d Dictionary,
        rules: SessionRules,
        mut rng: R,
        now: Instant,
    ) -> Result<Self, GameError> {
        let mut words = Vec::new();
        for round in Round::ALL {
            words.extend(draw_round(round, dictionary, &mut rng)?);
        }

        let word_score = words.first().map_or(0, |w| scoring_for(w.length).base);
        info!(words = words.len(), "Session started");

        Ok(Self {
            dictionary,
            rules,
            rng,
            phase: Phase::Classic,
            words,
            index: 0,
            attempts: Vec::new(),
            completed: Vec::new(),
            total_score: 0,
            word_score,
            row_started: now,
            final_stage: FIRST_FINAL_STAGE,
            final_deadline: None,
            last_reward: None,
        })
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn rules(&self) -> &SessionRules {
        &self.rules
    }

    /// The word in play, if any
    #[must_use]
    pub fn current_word(&self) -> Option<&WordEntry> {
        match self.phase {
            Phase::Classic | Phase::Final => self.words.get(self.index),
            Phase::AwaitingFinal | Phase::Finished => None,
        }
    }

    /// Guesses made on the current word
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Classic words already played
    #[must_use]
    pub fn completed(&self) -> &[CompletedWord] {
        &self.completed
    }

    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Points the current classic word is still worth
    #[must_use]
    pub const fn word_score(&self) -> u32 {
        self.word_score
    }

    /// Zero-based position of the current classic word
    #[must_use]
    pub const fn word_index(&self) -> usize {
        self.index
    }

    /// Number of classic words in the session
    #[must_use]
    pub fn classic_word_count(&self) -> usize {
        Round::ALL.iter().map(|r| r.word_count()).sum()
    }

    /// Round of the current classic word
    #[must_use]
    pub fn round(&self) -> Option<Round> {
        if self.phase != Phase::Classic {
            return None;
        }
        if self.index < Round::First.word_count() {
            Some(Round::First)
        } else {
            Some(Round::Second)
        }
    }

    #[must_use]
    pub const fn final_stage(&self) -> usize {
        self.final_stage
    }

    #[must_use]
    pub const fn last_reward(&self) -> Option<Reward> {
        self.last_reward
    }

    /// Remaining time on the current classic row
    #[must_use]
    pub fn row_time_left(&self, now: Instant) -> Option<Duration> {
        if self.phase != Phase::Classic {
            return None;
        }
        let limit = self.rules.row_time_limit?;
        Some(limit.saturating_sub(now.saturating_duration_since(self.row_started)))
    }

    /// Remaining time on the final clock
    #[must_use]
    pub fn final_time_left(&self, now: Instant) -> Option<Duration> {
        self.final_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Keyboard colouring for the current word
    #[must_use]
    pub fn letter_statuses(&self) -> LetterStatuses {
        let mut statuses = LetterStatuses::new();
        for attempt in &self.attempts {
            statuses.record(&attempt.guess, &attempt.response.feedback());
        }
        statuses
    }

    /// Submit a guess for the current word
    ///
    /// # Errors
    /// Returns `GameError::NoWordsOfLength` if the final needs a replacement
    /// word the dictionary cannot supply. The guess is then discarded and the
    /// session is left as it was.
    pub fn guess(&mut self, input: &str, now: Instant) -> Result<GuessOutcome, GameError> {
        if let Some(outcome) = self.expire(now) {
            return Ok(outcome);
        }

        let Some(entry) = self.current_word() else {
            return Ok(GuessOutcome::Inactive);
        };

        let guess = Word::new(input.trim());
        let target = Word::new(&entry.word);
        if guess.len() != target.len() {
            return Ok(GuessOutcome::Rejected {
                expected: target.len(),
                got: guess.len(),
            });
        }

        let response = score_words(&guess, &target, self.dictionary);
        self.attempts.push(Attempt {
            guess,
            response: response.clone(),
        });

        match self.phase {
            Phase::Classic => Ok(self.classic_guess(response, now)),
            Phase::Final => self.final_guess(response, now).inspect_err(|_| {
                self.attempts.pop();
            }),
            Phase::AwaitingFinal | Phase::Finished => Ok(GuessOutcome::Inactive),
        }
    }

    fn classic_guess(&mut self, response: GuessResponse, now: Instant) -> GuessOutcome {
        let answer = self.words[self.index].word.clone();

        if !response.is_valid {
            self.word_score = 0;
            self.finish_classic_word(false, now);
            return GuessOutcome::Burned {
                response: Some(response),
                reason: BurnReason::InvalidWord,
                answer,
            };
        }

        if response.is_correct {
            let points = self.word_score;
            self.total_score += points;
            self.finish_classic_word(true, now);
            return GuessOutcome::Solved { response, points };
        }

        let penalty = scoring_for(self.words[self.index].length).penalty;
        self.word_score = self.word_score.saturating_sub(penalty);

        if self.attempts.len() >= self.rules.max_attempts {
            self.word_score = 0;
            self.finish_classic_word(false, now);
            return GuessOutcome::Burned {
                response: Some(response),
                reason: BurnReason::OutOfAttempts,
                answer,
            };
        }

        self.row_started = now;
        GuessOutcome::Wrong {
            response,
            attempts_left: self.rules.max_attempts - self.attempts.len(),
        }
    }

    fn final_guess(
        &mut self,
        response: GuessResponse,
        now: Instant,
    ) -> Result<GuessOutcome, GameError> {
        let answer = self.words[self.index].word.clone();

        if !response.is_valid {
            self.replace_final_word(self.final_stage, now)?;
            return Ok(GuessOutcome::Burned {
                response: Some(response),
                reason: BurnReason::InvalidWord,
                answer,
            });
        }

        if response.is_correct {
            let reward = Reward::for_stage(self.final_stage, self.total_score);

            if self.final_stage >= LAST_FINAL_STAGE {
                info!(stage = self.final_stage, points = reward.points, "Final stage cleared");
                self.last_reward = Some(reward);
                self.phase = Phase::Finished;
                self.final_deadline = None;
                self.attempts.clear();
                return Ok(GuessOutcome::GameWon { response, reward });
            }

            self.replace_final_word(self.final_stage + 1, now)?;
            info!(stage = reward.stage, points = reward.points, "Final stage cleared");
            self.last_reward = Some(reward);
            return Ok(GuessOutcome::StageCleared { response, reward });
        }

        if self.attempts.len() >= self.rules.max_attempts {
            self.replace_final_word(self.final_stage, now)?;
            return Ok(GuessOutcome::Burned {
                response: Some(response),
                reason: BurnReason::OutOfAttempts,
                answer,
            });
        }

        Ok(GuessOutcome::Wrong {
            response,
            attempts_left: self.rules.max_attempts - self.attempts.len(),
        })
    }

    /// Apply the clocks
    ///
    /// A classic row past its limit burns the word; a final past its deadline
    /// ends the game. Returns the outcome when something expired.
    pub fn expire(&mut self, now: Instant) -> Option<GuessOutcome> {
        match self.phase {
            Phase::Classic => {
                if self.row_time_left(now)? > Duration::ZERO {
                    return None;
                }
                Some(self.timeout(now))
            }
            Phase::Final => {
                let deadline = self.final_deadline?;
                if now < deadline {
                    return None;
                }
                let answer = self.words[self.index].word.clone();
                info!(stage = self.final_stage, "Final clock expired");
                self.phase = Phase::Finished;
                self.final_deadline = None;
                self.attempts.clear();
                Some(GuessOutcome::TimeUp { answer })
            }
            Phase::AwaitingFinal | Phase::Finished => None,
        }
    }

    /// Burn the current classic word because its row ran out of time
    pub fn timeout(&mut self, now: Instant) -> GuessOutcome {
        if self.phase != Phase::Classic {
            return GuessOutcome::Inactive;
        }
        let answer = self.words[self.index].word.clone();
        self.word_score = 0;
        self.finish_classic_word(false, now);
        GuessOutcome::Burned {
            response: None,
            reason: BurnReason::Timeout,
            answer,
        }
    }

    fn finish_classic_word(&mut self, solved: bool, now: Instant) {
        let entry = self.words[self.index].clone();
        debug!(word = %entry.word, solved, points = self.word_score, "Classic word finished");

        self.completed.push(CompletedWord {
            entry,
            attempts: std::mem::take(&mut self.attempts),
            points: if solved { self.word_score } else { 0 },
            solved,
        });

        self.index += 1;
        self.row_started = now;
        match self.words.get(self.index) {
            Some(next) => self.word_score = scoring_for(next.length).base,
            None => {
                self.word_score = 0;
                self.phase = Phase::AwaitingFinal;
                info!(score = self.total_score, "Classic rounds finished");
            }
        }
    }

    /// Enter the final
    ///
    /// # Errors
    /// Returns `GameError::InvalidAction` unless the classic rounds are over,
    /// or `GameError::NoWordsOfLength` if there are no four-letter words.
    pub fn start_final(&mut self, now: Instant) -> Result<&WordEntry, GameError> {
        if self.phase != Phase::AwaitingFinal {
            return Err(GameError::InvalidAction("final can only start after the classic rounds"));
        }

        self.replace_final_word(FIRST_FINAL_STAGE, now)?;
        self.phase = Phase::Final;
        self.final_deadline = Some(now + self.rules.final_time_limit);
        info!(score = self.total_score, "Final started");

        Ok(&self.words[self.index])
    }

    /// Skip the current final word for another of the same stage
    ///
    /// # Errors
    /// Returns `GameError::InvalidAction` outside the final or before any
    /// guess was made on the word.
    pub fn pass(&mut self, now: Instant) -> Result<&WordEntry, GameError> {
        if self.phase != Phase::Final {
            return Err(GameError::InvalidAction("pass is only allowed in the final"));
        }
        if self.attempts.is_empty() {
            return Err(GameError::InvalidAction("make a guess before passing"));
        }

        self.replace_final_word(self.final_stage, now)?;
        Ok(&self.words[self.index])
    }

    /// Put a fresh word of `stage` letters in play
    ///
    /// The word is drawn before anything changes, so a failed draw leaves the
    /// session untouched.
    fn replace_final_word(&mut self, stage: usize, now: Instant) -> Result<(), GameError> {
        let entry = self
            .dictionary
            .random_word(stage, &mut self.rng)
            .map(WordEntry::new)?
            .ok_or(GameError::NoWordsOfLength(stage))?;

        self.final_stage = stage;
        self.words.clear();
        self.words.push(entry);
        self.index = 0;
        self.attempts.clear();
        self.row_started = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_words([
            "elma", "kapı", "masa", "okul", //
            "kitap", "masal", "elmas", "armut", //
            "yaprak", "toprak", "karpuz", //
            "domates", "pencere",
        ])
    }

    fn session(dictionary: &Dictionary, now: Instant) -> GameSession<'_, StdRng> {
        GameSession::new(
            dictionary,
            SessionRules::default(),
            StdRng::seed_from_u64(11),
            now,
        )
        .unwrap()
    }

    /// A dictionary word of the current word's length that is not the answer
    fn wrong_guess<R: Rng>(session: &GameSession<'_, R>, dictionary: &Dictionary) -> String {
        let entry = session.current_word().unwrap();
        dictionary
            .bucket(entry.length)
            .iter()
            .find(|w| **w != entry.word)
            .unwrap()
            .clone()
    }

    fn solve_current<R: Rng>(session: &mut GameSession<'_, R>, now: Instant) -> GuessOutcome {
        let answer = session.current_word().unwrap().word.clone();
        session.guess(&answer, now).unwrap()
    }

    #[test]
    fn scoring_table() {
        assert_eq!(scoring_for(4), WordScoring { base: 1000, penalty: 100 });
        assert_eq!(scoring_for(5), WordScoring { base: 2000, penalty: 200 });
        assert_eq!(scoring_for(6), WordScoring { base: 2000, penalty: 200 });
    }

    #[test]
    fn session_draws_twelve_words() {
        let dictionary = dictionary();
        let now = Instant::now();
        let session = session(&dictionary, now);

        assert_eq!(session.phase(), Phase::Classic);
        assert_eq!(session.classic_word_count(), 12);
        assert_eq!(session.round(), Some(Round::First));
        assert_eq!(session.current_word().unwrap().length, 4);
        assert_eq!(session.word_score(), 1000);
    }

    #[test]
    fn solving_banks_word_score() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = session(&dictionary, now);

        let outcome = solve_current(&mut session, now);
        assert!(matches!(outcome, GuessOutcome::Solved { points: 1000, .. }));
        assert_eq!(session.total_score(), 1000);
        assert_eq!(session.word_index(), 1);
        assert!(session.attempts().is_empty());
        assert!(session.completed()[0].solved);
    }

    #[test]
    fn wrong_guess_applies_penalty() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = session(&dictionary, now);

        let guess = wrong_guess(&session, &dictionary);
        let outcome = session.guess(&guess, now).unwrap();
        assert!(matches!(outcome, GuessOutcome::Wrong { attempts_left: 4, .. }));
        assert_eq!(session.word_score(), 900);

        let outcome = solve_current(&mut session, now);
        assert!(matches!(outcome, GuessOutcome::Solved { points: 900, .. }));
        assert_eq!(session.total_score(), 900);
    }

    #[test]
    fn wrong_length_is_rejected_without_cost() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = session(&dictionary, now);

        let outcome = session.guess("masal", now).unwrap();
        assert_eq!(outcome, GuessOutcome::Rejected { expected: 4, got: 5 });
        assert!(session.attempts().is_empty());
        assert_eq!(session.word_score(), 1000);
    }

    #[test]
    fn invalid_word_burns_the_word() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = session(&dictionary, now);
        let answer = session.current_word().unwrap().word.clone();

        let outcome = session.guess("zzzz", now).unwrap();
        match outcome {
            GuessOutcome::Burned {
                reason,
                answer: burned,
                response,
            } => {
                assert_eq!(reason, BurnReason::InvalidWord);
                assert_eq!(burned, answer);
                assert_eq!(response.unwrap().result, vec![Verdict::Absent; 4]);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(session.total_score(), 0);
        assert_eq!(session.word_index(), 1);
    }

    #[test]
    fn running_out_of_attempts_burns_the_word() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = session(&dictionary, now);

        let guess = wrong_guess(&session, &dictionary);
        for _ in 0..4 {
            assert!(matches!(
                session.guess(&guess, now).unwrap(),
                GuessOutcome::Wrong { .. }
            ));
        }
        let outcome = session.guess(&guess, now).unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Burned {
                reason: BurnReason::OutOfAttempts,
                ..
            }
        ));
        assert_eq!(session.completed()[0].attempts.len(), 5);
        assert_eq!(session.completed()[0].points, 0);
    }

    #[test]
    fn row_timer_burns_the_word() {
        let dictionary = dictionary();
        let start = Instant::now();
        let mut session = session(&dictionary, start);

        assert_eq!(session.expire(start + Duration::from_secs(5)), None);
        assert_eq!(
            session.row_time_left(start + Duration::from_secs(5)),
            Some(Duration::from_secs(10))
        );

        let later = start + Duration::from_secs(15);
        assert!(matches!(
            session.expire(later),
            Some(GuessOutcome::Burned {
                reason: BurnReason::Timeout,
                response: None,
                ..
            })
        ));
        assert_eq!(session.word_index(), 1);
        assert_eq!(session.row_time_left(later), Some(Duration::from_secs(15)));
    }

    #[test]
    fn disabled_row_timer_never_expires() {
        let dictionary = dictionary();
        let start = Instant::now();
        let rules = SessionRules {
            row_time_limit: None,
            ..SessionRules::default()
        };
        let mut session =
            GameSession::new(&dictionary, rules, StdRng::seed_from_u64(1), start).unwrap();

        assert_eq!(session.expire(start + Duration::from_secs(3600)), None);
    }

    #[test]
    fn classic_then_final_flow() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = session(&dictionary, now);

        for index in 0..12 {
            let expected_round = if index < 6 { Round::First } else { Round::Second };
            assert_eq!(session.round(), Some(expected_round));
            assert!(matches!(
                solve_current(&mut session, now),
                GuessOutcome::Solved { .. }
            ));
        }

        // 3 × 1000 + 9 × 2000
        assert_eq!(session.total_score(), 21_000);
        assert_eq!(session.phase(), Phase::AwaitingFinal);
        assert_eq!(session.current_word(), None);
        assert_eq!(session.guess("elma", now).unwrap(), GuessOutcome::Inactive);

        let first = session.start_final(now).unwrap();
        assert_eq!(first.length, 4);
        assert_eq!(session.phase(), Phase::Final);
        assert_eq!(session.final_time_left(now), Some(Duration::from_secs(120)));

        for stage in 4..7 {
            match solve_current(&mut session, now) {
                GuessOutcome::StageCleared { reward, .. } => assert_eq!(reward.stage, stage),
                other => panic!("unexpected outcome {other:?}"),
            }
            assert_eq!(session.current_word().unwrap().length, stage + 1);
        }

        match solve_current(&mut session, now) {
            GuessOutcome::GameWon { reward, .. } => {
                assert_eq!(reward.points, 42_000);
                assert!(reward.grand_prize);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(session.phase(), Phase::Finished);
    }

    #[test]
    fn rewards_per_stage() {
        assert_eq!(Reward::for_stage(4, 1000).points, 500);
        assert_eq!(Reward::for_stage(5, 1000).points, 1000);
        assert_eq!(Reward::for_stage(6, 1000).points, 2000);
        let last = Reward::for_stage(7, 1000);
        assert_eq!(last.points, 2000);
        assert!(last.grand_prize);
        assert!(!Reward::for_stage(6, 1000).grand_prize);
    }

    fn into_final<'d>(dictionary: &'d Dictionary, now: Instant) -> GameSession<'d, StdRng> {
        let mut session = session(dictionary, now);
        while session.phase() == Phase::Classic {
            session.timeout(now);
        }
        session.start_final(now).unwrap();
        session
    }

    #[test]
    fn rounds_share_the_five_letter_bucket() {
        // Three five-letter words serve both rounds
        let dictionary = Dictionary::from_words([
            "elma", "kapı", "masa", //
            "kitap", "masal", "elmas", //
            "yaprak", "toprak", "karpuz",
        ]);
        let now = Instant::now();
        let mut session = session(&dictionary, now);
        while session.phase() == Phase::Classic {
            session.timeout(now);
        }

        let mut five: Vec<&str> = session
            .completed()
            .iter()
            .filter(|w| w.entry.length == 5)
            .map(|w| w.entry.word.as_str())
            .collect();
        assert_eq!(five.len(), 6);
        five.sort_unstable();
        five.dedup();
        assert_eq!(five, ["ELMAS", "KİTAP", "MASAL"]);
    }

    #[test]
    fn missing_stage_bucket_leaves_session_unchanged() {
        let dictionary = Dictionary::from_words([
            "elma", "kapı", "masa", //
            "kitap", "masal", "elmas", //
            "yaprak", "toprak", "karpuz",
        ]);
        let now = Instant::now();
        let mut session = into_final(&dictionary, now);

        for stage in 4..=5 {
            assert_eq!(session.final_stage(), stage);
            assert!(matches!(
                solve_current(&mut session, now),
                GuessOutcome::StageCleared { .. }
            ));
        }

        let stuck = session.current_word().unwrap().clone();
        assert_eq!(stuck.length, 6);
        assert_eq!(
            session.guess(&stuck.word, now),
            Err(GameError::NoWordsOfLength(7))
        );
        assert_eq!(session.final_stage(), 6);
        assert_eq!(session.phase(), Phase::Final);
        assert!(session.attempts().is_empty());
        assert_eq!(session.current_word(), Some(&stuck));
        assert_eq!(session.last_reward().map(|r| r.stage), Some(5));

        // Retrying the same word cannot skip the missing stage
        assert_eq!(
            session.guess(&stuck.word, now),
            Err(GameError::NoWordsOfLength(7))
        );
        assert_eq!(session.phase(), Phase::Final);
        assert!(session.expire(now).is_none());
    }

    #[test]
    fn start_final_requires_finished_classic() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = session(&dictionary, now);

        assert!(matches!(
            session.start_final(now),
            Err(GameError::InvalidAction(_))
        ));
    }

    #[test]
    fn pass_requires_a_guess() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = into_final(&dictionary, now);

        assert!(matches!(session.pass(now), Err(GameError::InvalidAction(_))));

        let guess = wrong_guess(&session, &dictionary);
        session.guess(&guess, now).unwrap();
        let replacement = session.pass(now).unwrap();
        assert_eq!(replacement.length, 4);
        assert!(session.attempts().is_empty());
    }

    #[test]
    fn final_invalid_word_replaces_same_stage() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = into_final(&dictionary, now);

        let outcome = session.guess("zzzz", now).unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Burned {
                reason: BurnReason::InvalidWord,
                ..
            }
        ));
        assert_eq!(session.final_stage(), 4);
        assert_eq!(session.phase(), Phase::Final);
    }

    #[test]
    fn final_clock_ends_game() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = into_final(&dictionary, now);

        let late = now + Duration::from_secs(121);
        let answer = session.current_word().unwrap().word.clone();
        assert_eq!(
            session.guess(&answer, late).unwrap(),
            GuessOutcome::TimeUp { answer }
        );
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.final_time_left(late), None);
    }

    #[test]
    fn letter_statuses_follow_attempts() {
        let dictionary = dictionary();
        let now = Instant::now();
        let mut session = session(&dictionary, now);

        assert!(session.letter_statuses().is_empty());
        let guess = wrong_guess(&session, &dictionary);
        session.guess(&guess, now).unwrap();
        let statuses = session.letter_statuses();
        for letter in Word::new(&guess).chars() {
            assert!(statuses.get(*letter).is_some());
        }
    }
}
