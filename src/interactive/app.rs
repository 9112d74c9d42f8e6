//! TUI application state and logic

use crate::core::to_upper;
use crate::dictionary::Dictionary;
use crate::game::{GameSession, GuessOutcome, Phase, SessionRules};
use crate::output::formatters::outcome_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the clocks are re-checked while waiting for a key
const TICK: Duration = Duration::from_millis(250);

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a, ThreadRng>,
    pub dictionary: &'a Dictionary,
    pub rules: SessionRules,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
    pub grand_prizes: usize,
}

impl<'a> App<'a> {
    /// Start the first session
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary cannot supply a session's words.
    pub fn new(dictionary: &'a Dictionary, rules: SessionRules) -> Result<Self> {
        let session = GameSession::new(dictionary, rules.clone(), rand::rng(), Instant::now())?;
        let mut app = Self {
            session,
            dictionary,
            rules,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Welcome! The first letter of each word is given.", MessageStyle::Info);
        Ok(app)
    }

    pub fn new_game(&mut self) -> Result<()> {
        self.session =
            GameSession::new(self.dictionary, self.rules.clone(), rand::rng(), Instant::now())?;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Letters the current word still accepts
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.session.current_word().map_or(0, |entry| entry.length)
    }

    pub fn push_letter(&mut self, letter: char) {
        if !letter.is_alphabetic() || self.input_buffer.chars().count() >= self.word_length() {
            return;
        }
        self.input_buffer.push_str(&to_upper(&letter.to_string()));
    }

    pub fn submit(&mut self) {
        if self.input_buffer.chars().count() != self.word_length() {
            self.add_message(
                &format!("Word must have {} letters", self.word_length()),
                MessageStyle::Error,
            );
            return;
        }

        let input = std::mem::take(&mut self.input_buffer);
        match self.session.guess(&input, Instant::now()) {
            Ok(outcome) => self.apply(&outcome),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Check the clocks
    pub fn tick(&mut self) {
        if let Some(outcome) = self.session.expire(Instant::now()) {
            self.input_buffer.clear();
            self.apply(&outcome);
        }
    }

    pub fn start_final(&mut self) {
        if self.session.total_score() == 0 {
            self.add_message("No points banked, no final this time", MessageStyle::Error);
            return;
        }
        match self.session.start_final(Instant::now()) {
            Ok(_) => self.add_message(
                &format!(
                    "FINAL! {} seconds on the clock",
                    self.rules.final_time_limit.as_secs()
                ),
                MessageStyle::Success,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn pass(&mut self) {
        match self.session.pass(Instant::now()) {
            Ok(_) => {
                self.input_buffer.clear();
                self.add_message("Passed", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn apply(&mut self, outcome: &GuessOutcome) {
        let style = match outcome {
            GuessOutcome::Solved { .. }
            | GuessOutcome::StageCleared { .. }
            | GuessOutcome::GameWon { .. } => MessageStyle::Success,
            GuessOutcome::Wrong { .. } => MessageStyle::Info,
            _ => MessageStyle::Error,
        };
        self.add_message(&outcome_message(outcome), style);

        if self.session.phase() == Phase::AwaitingFinal {
            self.add_message(
                &format!(
                    "Classic rounds over: {} points. Enter starts the final",
                    self.session.total_score()
                ),
                MessageStyle::Info,
            );
        }

        if self.session.phase() == Phase::Finished {
            self.stats.games_played += 1;
            self.stats.best_score = self.stats.best_score.max(self.session.total_score());
            if matches!(outcome, GuessOutcome::GameWon { .. }) {
                self.stats.grand_prizes += 1;
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match (self.session.phase(), code) {
            (_, KeyCode::Esc) => self.should_quit = true,
            (Phase::AwaitingFinal, KeyCode::Enter) => self.start_final(),
            (Phase::AwaitingFinal | Phase::Finished, KeyCode::Char('n' | 'N')) => {
                self.new_game()?;
            }
            (Phase::Classic | Phase::Final, KeyCode::Char(c)) => self.push_letter(c),
            (Phase::Classic | Phase::Final, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (Phase::Classic | Phase::Final, KeyCode::Enter) => self.submit(),
            (Phase::Final, KeyCode::Tab) => self.pass(),
            _ => {}
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let KeyCode::Char('c') = key.code
                && key.modifiers.contains(KeyModifiers::CONTROL)
            {
                app.should_quit = true;
            } else {
                app.handle_key(key.code)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
