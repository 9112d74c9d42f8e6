//! Guess analysis command
//!
//! Scores one guess against every word of the same length and reports how the
//! bucket splits into feedback patterns. A guess that spreads the bucket over
//! many small groups tells the player more.

use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: String,
    pub is_valid: bool,
    pub total_targets: usize,
    /// Feedback patterns with the number of targets producing each, most common first
    pub partitions: Vec<(Feedback, usize)>,
    pub entropy: f64,
    pub expected_remaining: f64,
}

impl AnalysisResult {
    /// Size of the worst-case group
    #[must_use]
    pub fn largest_partition(&self) -> usize {
        self.partitions.first().map_or(0, |&(_, count)| count)
    }
}

/// Analyze a guess against its length bucket
///
/// # Errors
///
/// Returns an error if the word is not a valid word or no dictionary words
/// share its length.
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult, String> {
    let guess = Word::parse(word).map_err(|e| format!("Invalid word: {e}"))?;
    let targets = dictionary.bucket(guess.len());
    if targets.is_empty() {
        return Err(format!("No dictionary words of length {}", guess.len()));
    }

    let counts: FxHashMap<Feedback, usize> = targets
        .par_iter()
        .filter_map(|target| Feedback::calculate(&guess, &Word::new(target)))
        .fold(FxHashMap::default, |mut acc, feedback| {
            *acc.entry(feedback).or_insert(0) += 1;
            acc
        })
        .reduce(FxHashMap::default, |mut left, right| {
            for (feedback, count) in right {
                *left.entry(feedback).or_insert(0) += count;
            }
            left
        });

    let total_targets = targets.len();
    let total = total_targets as f64;
    let entropy = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>();
    let expected_remaining = counts
        .values()
        .map(|&count| (count * count) as f64 / total)
        .sum::<f64>();

    let mut partitions: Vec<(Feedback, usize)> = counts.into_iter().collect();
    partitions.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_code().cmp(&b.0.to_code())));

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        is_valid: dictionary.contains(&guess),
        total_targets,
        partitions,
        entropy,
        expected_remaining,
    })
}
