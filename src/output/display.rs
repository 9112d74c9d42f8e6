//! Display functions for command results

use super::formatters::{create_progress_bar, masked_word, tile_row, verdicts_to_emoji};
use crate::commands::{AnalysisResult, CheckResult, StartResult};
use crate::game::{CompletedWord, Reward};
use colored::Colorize;

/// Print the words drawn for a round, first letters only
pub fn print_round_words(result: &StartResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Round {}: {} words",
        result.round.number().to_string().bright_yellow().bold(),
        result.words.len()
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, entry) in result.words.iter().enumerate() {
        println!(
            "  {}. {}  ({} letters)",
            (i + 1).to_string().bright_black(),
            masked_word(entry.first_letter, entry.length).bright_white().bold(),
            entry.length
        );
    }
    println!();
}

/// Print a scored guess
pub fn print_check_result(result: &CheckResult) {
    let response = &result.response;
    if response.result.is_empty() {
        println!(
            "{} {} has {} letters, {} has {}",
            "✗".red().bold(),
            result.guess,
            result.guess.len(),
            result.target,
            result.target.len()
        );
        return;
    }

    println!(
        "\n  {}  {}",
        tile_row(&result.guess, &response.result),
        verdicts_to_emoji(&response.result)
    );

    let validity = if response.is_valid {
        "in dictionary".green()
    } else {
        "not in dictionary".yellow()
    };
    println!("  {} ({validity})", result.guess.text().bright_white().bold());

    if response.is_correct {
        println!("  {}", "✅ Correct!".green().bold());
    }
    println!();
}

/// Print how a guess splits its length bucket
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.is_valid {
        println!("\n{}", "⚠ Not a dictionary word".yellow());
    }

    let max_entropy = (result.total_targets as f64).log2();
    let bar = create_progress_bar(result.entropy, max_entropy, 30);

    println!("\n📊 Against {} words of the same length:", result.total_targets);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Patterns:    {}", result.partitions.len());
    println!(
        "   Expected:    {:.1} words remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} words", result.largest_partition());

    println!("\n📈 {}", "Most common patterns:".bright_cyan().bold());
    for (feedback, count) in result.partitions.iter().take(10) {
        let pct = (*count as f64 / result.total_targets as f64) * 100.0;
        println!("   {}  {count:4} ({pct:5.1}%)", feedback.to_emoji());
    }
    println!();
}

/// Print the classic rounds as a scorecard
pub fn print_scorecard(completed: &[CompletedWord], total_score: u32) {
    println!("\n{}", "─".repeat(50).cyan());
    for (i, word) in completed.iter().enumerate() {
        let mark = if word.solved { "✓".green() } else { "✗".red() };
        println!(
            "  {:>2}. {mark} {:<8} {:>2} tries  {:>5} pts",
            i + 1,
            word.entry.word,
            word.attempts.len(),
            word.points
        );
    }
    println!("{}", "─".repeat(50).cyan());
    println!(
        "  Total: {}",
        total_score.to_string().bright_yellow().bold()
    );
    println!();
}

/// Print a final stage reward
pub fn print_reward(reward: &Reward) {
    if reward.grand_prize {
        println!("\n{}", "═".repeat(50).bright_cyan());
        println!(
            "{}",
            "   🏆  G R A N D   P R I Z E !  🏆".bright_green().bold()
        );
        println!("{}", "═".repeat(50).bright_cyan());
    }
    println!(
        "  Stage {} cleared: {} points",
        reward.stage,
        reward.points.to_string().bright_yellow().bold()
    );
}
