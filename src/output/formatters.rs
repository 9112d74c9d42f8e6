//! Formatting utilities for terminal output

use crate::core::{Verdict, Word};
use crate::game::{BurnReason, GuessOutcome};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, verdict: Verdict) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        Verdict::Correct => tile.black().on_green().bold(),
        Verdict::Present => tile.black().on_yellow().bold(),
        Verdict::Absent => tile.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
///
/// Positions without a verdict (length mismatch) are printed plain.
#[must_use]
pub fn tile_row(guess: &Word, verdicts: &[Verdict]) -> String {
    guess
        .chars()
        .iter()
        .enumerate()
        .map(|(i, &letter)| match verdicts.get(i) {
            Some(&verdict) => letter_tile(letter, verdict).to_string(),
            None => format!(" {letter} "),
        })
        .collect()
}

/// Verdicts as an emoji string
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|v| v.emoji()).collect()
}

/// Hide all but the first letter of an answer: `K____`
#[must_use]
pub fn masked_word(first_letter: char, length: usize) -> String {
    let mut masked = String::with_capacity(length + 4);
    masked.push(first_letter);
    masked.extend(std::iter::repeat_n('_', length.saturating_sub(1)));
    masked
}

/// One-line plain text summary of a guess outcome
#[must_use]
pub fn outcome_message(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Rejected { expected, got } => {
            format!("Word must have {expected} letters, got {got}")
        }
        GuessOutcome::Wrong { attempts_left, .. } => match attempts_left {
            1 => "Last try!".to_string(),
            n => format!("{n} tries left"),
        },
        GuessOutcome::Solved { points, .. } => format!("Correct! +{points} points"),
        GuessOutcome::Burned { reason, answer, .. } => {
            let why = match reason {
                BurnReason::InvalidWord => "Not in the dictionary",
                BurnReason::OutOfAttempts => "Out of tries",
                BurnReason::Timeout => "Time is up",
            };
            format!("{why}. The word was {answer}")
        }
        GuessOutcome::StageCleared { reward, .. } => format!(
            "Stage {} cleared ({} points). Next: {} letters",
            reward.stage,
            reward.points,
            reward.stage + 1
        ),
        GuessOutcome::GameWon { reward, .. } => {
            format!("GRAND PRIZE! {} points", reward.points)
        }
        GuessOutcome::TimeUp { answer } => format!("Final clock ran out. The word was {answer}"),
        GuessOutcome::Inactive => "No word in play".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
