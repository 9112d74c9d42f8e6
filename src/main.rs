//! Lingo Türkiye - CLI
//!
//! Play in a TUI or line mode, or drive the game engine from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lingo::{
    api::{GameService, Method, StartResponse},
    commands::{analyze_word, check_guess, run_simple, start_round},
    config::AppConfig,
    dictionary::{Dictionary, load_from_file},
    logging::setup_logging,
    output::{print_analysis_result, print_check_result, print_round_words},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "lingo",
    about = "Turkish Lingo word game: play, score guesses, or query the game API",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list (.json buckets or one word per line); overrides the config file
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Draw the words for a round
    Start {
        /// Round number (1 or 2)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        round: i64,

        /// Print the JSON response instead of the masked words
        #[arg(long)]
        json: bool,
    },

    /// Score a guess against a target word
    Check {
        /// The guess
        word: String,

        /// The word being guessed
        target: String,

        /// Print the JSON response
        #[arg(long)]
        json: bool,
    },

    /// Show how a guess splits the words of its length
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Send one request through the JSON boundary
    Api {
        /// GET or POST
        method: String,

        /// Route, e.g. /api/game/start or /word?len=5
        path: String,

        /// JSON request body
        #[arg(default_value = "")]
        body: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    setup_logging(&config.logging, cli.log_json).map_err(|e| anyhow::anyhow!(e))?;
    if let Some(path) = &cli.config {
        info!(path = %path.display(), "Configuration loaded");
    }

    let dictionary = load_dictionary(cli.dictionary.as_deref().or(config.dictionary.path.as_deref()))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, &config),
        Commands::Simple => {
            run_simple(&dictionary, config.game.rules()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Start { round, json } => run_start_command(round, json, &dictionary),
        Commands::Check { word, target, json } => {
            run_check_command(&word, &target, json, &dictionary)
        }
        Commands::Analyze { word } => run_analyze_command(&word, &dictionary),
        Commands::Api { method, path, body } => run_api_command(&method, &path, &body, dictionary),
    }
}

/// Load the dictionary from a file, or fall back to the embedded list
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display()))?,
        None => Dictionary::embedded(),
    };
    if dictionary.is_empty() {
        bail!("Dictionary is empty");
    }
    info!(words = dictionary.total_words(), "Dictionary ready");
    Ok(dictionary)
}

fn run_start_command(round: i64, json: bool, dictionary: &Dictionary) -> Result<()> {
    let result = start_round(round, dictionary)?;
    if json {
        let response = StartResponse {
            words: result.words,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_round_words(&result);
    }
    Ok(())
}

fn run_check_command(word: &str, target: &str, json: bool, dictionary: &Dictionary) -> Result<()> {
    let result = check_guess(word, target, dictionary);
    if json {
        println!("{}", serde_json::to_string_pretty(&result.response)?);
    } else {
        print_check_result(&result);
    }
    Ok(())
}

fn run_analyze_command(word: &str, dictionary: &Dictionary) -> Result<()> {
    let result = analyze_word(word, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_api_command(method: &str, path: &str, body: &str, dictionary: Dictionary) -> Result<()> {
    let method: Method = method.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let service = GameService::new(Arc::new(dictionary));

    let reply = service.dispatch(method, path, body);
    println!("{}", reply.status);
    println!("{}", serde_json::to_string_pretty(&reply.body)?);
    if !reply.is_success() {
        bail!("{method} {path} returned status {}", reply.status);
    }
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, config: &AppConfig) -> Result<()> {
    use lingo::interactive::{App, run_tui};

    let app = App::new(dictionary, config.game.rules())?;
    run_tui(app)
}
