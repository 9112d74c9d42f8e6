//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Clocks are checked whenever a line is
//! entered, so a slow answer burns the word on submission.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::{GameSession, GuessOutcome, Phase, SessionRules};
use crate::output::formatters::{masked_word, outcome_message, tile_row};
use crate::output::{print_reward, print_scorecard};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// dictionary cannot supply the words a session needs.
pub fn run_simple(dictionary: &Dictionary, rules: SessionRules) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Lingo - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word. Its first letter is shown.");
    println!("  🟩 right letter, right place");
    println!("  🟨 right letter, wrong place");
    println!("  ⬜ letter not in the word\n");
    println!(
        "You have {} tries per word. A word not in the dictionary loses the word.",
        rules.max_attempts
    );
    println!("Commands: 'quit' to exit, 'pass' to skip a word in the final\n");

    let mut session = GameSession::new(dictionary, rules, rand::rng(), Instant::now())
        .map_err(|e| e.to_string())?;
    announce_word(&session);

    loop {
        match session.phase() {
            Phase::AwaitingFinal => {
                print_scorecard(session.completed(), session.total_score());
                if session.total_score() == 0 {
                    println!("No points banked, no final this time.\n");
                    return Ok(());
                }
                match get_user_input("Play the final? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" | "evet" | "e" => {
                        session
                            .start_final(Instant::now())
                            .map_err(|e| e.to_string())?;
                        println!(
                            "\n{} {} seconds on the clock.",
                            "FINAL!".bright_magenta().bold(),
                            session.rules().final_time_limit.as_secs()
                        );
                        announce_word(&session);
                    }
                    _ => {
                        finish(&session);
                        return Ok(());
                    }
                }
                continue;
            }
            Phase::Finished => {
                finish(&session);
                return Ok(());
            }
            Phase::Classic | Phase::Final => {}
        }

        let input = get_user_input("Guess")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                finish(&session);
                return Ok(());
            }
            "pass" | "p" => {
                match session.pass(Instant::now()) {
                    Ok(_) => {
                        println!("Passed.");
                        announce_word(&session);
                    }
                    Err(e) => println!("{} {e}\n", "✗".red()),
                }
                continue;
            }
            "" => continue,
            _ => {}
        }

        let outcome = session
            .guess(&input, Instant::now())
            .map_err(|e| e.to_string())?;
        report(&session, &Word::new(&input), &outcome);
    }
}

fn report<R: rand::Rng>(session: &GameSession<'_, R>, guess: &Word, outcome: &GuessOutcome) {
    let response = match outcome {
        GuessOutcome::Wrong { response, .. }
        | GuessOutcome::Solved { response, .. }
        | GuessOutcome::StageCleared { response, .. }
        | GuessOutcome::GameWon { response, .. }
        | GuessOutcome::Burned {
            response: Some(response),
            ..
        } => Some(response),
        _ => None,
    };
    if let Some(response) = response {
        println!("  {}", tile_row(guess, &response.result));
    }

    let message = outcome_message(outcome);
    match outcome {
        GuessOutcome::Solved { .. } | GuessOutcome::StageCleared { .. } => {
            println!("{}\n", message.green().bold());
        }
        GuessOutcome::GameWon { reward, .. } => print_reward(reward),
        GuessOutcome::Wrong { .. } => println!("{message}\n"),
        _ => println!("{}\n", message.yellow()),
    }

    if matches!(
        outcome,
        GuessOutcome::Solved { .. } | GuessOutcome::Burned { .. } | GuessOutcome::StageCleared { .. }
    ) {
        announce_word(session);
    }
}

fn announce_word<R: rand::Rng>(session: &GameSession<'_, R>) {
    let Some(entry) = session.current_word() else {
        return;
    };
    let now = Instant::now();
    match session.phase() {
        Phase::Classic => println!(
            "Word {}/{} ({} pts): {}",
            session.word_index() + 1,
            session.classic_word_count(),
            session.word_score(),
            masked_word(entry.first_letter, entry.length).bright_white().bold()
        ),
        Phase::Final => println!(
            "Stage {} ({}s left): {}",
            session.final_stage(),
            session.final_time_left(now).map_or(0, |d| d.as_secs()),
            masked_word(entry.first_letter, entry.length).bright_white().bold()
        ),
        Phase::AwaitingFinal | Phase::Finished => {}
    }
}

fn finish<R: rand::Rng>(session: &GameSession<'_, R>) {
    if let Some(reward) = session.last_reward() {
        println!(
            "\nBest final stage: {} ({} points)",
            reward.stage, reward.points
        );
    }
    println!(
        "\n👋 Thanks for playing! Classic score: {}\n",
        session.total_score().to_string().bright_yellow().bold()
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
