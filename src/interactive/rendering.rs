//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::game::Phase;
use crate::output::formatters::masked_word;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use std::time::{Duration, Instant};

/// Turkish Q keyboard rows
const KEYBOARD_ROWS: [&str; 3] = ["ERTYUIOPĞÜ", "ASDFGHJKLŞİ", "ZCVBNMÖÇ"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let now = Instant::now();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1], now);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("LINGO TÜRKİYE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let title = match session.phase() {
        Phase::Final => format!(" Final: stage {} ", session.final_stage()),
        _ => format!(
            " Word {}/{} ",
            (session.word_index() + 1).min(session.classic_word_count()),
            session.classic_word_count()
        ),
    };

    let mut lines = Vec::new();
    match session.current_word() {
        Some(entry) => {
            let empty = Style::default().fg(Color::White).bg(Color::Black);
            for attempt in session.attempts() {
                let spans: Vec<Span> = attempt
                    .guess
                    .chars()
                    .iter()
                    .zip(&attempt.response.result)
                    .flat_map(|(&letter, &verdict)| tile(letter, verdict_style(verdict)))
                    .collect();
                lines.push(Line::from(spans));
                lines.push(Line::from(""));
            }

            if session.attempts().len() < session.rules().max_attempts {
                let typed: Vec<char> = app.input_buffer.chars().collect();
                let spans: Vec<Span> = (0..entry.length)
                    .flat_map(|i| {
                        let letter = match (i, typed.get(i)) {
                            (_, Some(&c)) => c,
                            (0, None) => entry.first_letter,
                            _ => '_',
                        };
                        tile(letter, empty)
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
        }
        None => {
            let text = match session.phase() {
                Phase::AwaitingFinal => "Classic rounds over. Press Enter for the final.",
                _ => "Game over. Press 'n' for a new game.",
            };
            lines.push(Line::from(text));
            lines.push(Line::from(""));
            for word in session.completed() {
                let style = if word.solved {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<8}", word.entry.word), style),
                    Span::raw(format!("{:>6}", word.points)),
                ]));
            }
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Clock
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_clock(f, app, chunks[0], now);
    render_keyboard(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_clock(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let session = &app.session;
    let (left, limit, title) = match session.phase() {
        Phase::Classic => (
            session.row_time_left(now),
            session.rules().row_time_limit,
            " Row clock ",
        ),
        Phase::Final => (
            session.final_time_left(now),
            Some(session.rules().final_time_limit),
            " Final clock ",
        ),
        Phase::AwaitingFinal | Phase::Finished => (None, None, " Clock "),
    };

    let (percent, label) = match (left, limit) {
        (Some(left), Some(limit)) if limit > Duration::ZERO => (
            ((left.as_secs_f64() / limit.as_secs_f64()) * 100.0).clamp(0.0, 100.0) as u16,
            format!("{}s", left.as_secs()),
        ),
        _ => (0, "-".to_string()),
    };
    let color = if percent < 25 { Color::Red } else { Color::Cyan };

    let gauge = Gauge::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(label);
    f.render_widget(gauge, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let statuses = app.session.letter_statuses();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = statuses
                        .get(letter)
                        .map_or_else(|| Style::default().fg(Color::White), verdict_style);
                    Span::styled(letter.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let (title, color) = match session.phase() {
        Phase::Classic => (" Guess | Enter: submit ", Color::Yellow),
        Phase::Final => (" Guess | Enter: submit | Tab: pass ", Color::Magenta),
        Phase::AwaitingFinal => (" Enter: final | n: new game ", Color::Green),
        Phase::Finished => (" n: new game | Esc: quit ", Color::Green),
    };
    let hint = session
        .current_word()
        .map(|entry| masked_word(entry.first_letter, entry.length))
        .unwrap_or_default();
    let content = if app.input_buffer.is_empty() {
        hint
    } else {
        app.input_buffer.clone()
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let session = &app.session;
    let phase_text = match (session.phase(), session.round()) {
        (Phase::Classic, Some(round)) => format!("Round {}", round.number()),
        (Phase::Final, _) => "Final".to_string(),
        (Phase::AwaitingFinal, _) => "Final pending".to_string(),
        _ => "Game over".to_string(),
    };
    f.render_widget(
        Paragraph::new(phase_text).alignment(Alignment::Center),
        chunks[0],
    );

    let score_text = format!("Score: {}", session.total_score());
    f.render_widget(
        Paragraph::new(score_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow)),
        chunks[1],
    );

    let worth_text = match (session.phase(), session.last_reward()) {
        (Phase::Classic, _) => format!("Word: {} pts", session.word_score()),
        (_, Some(reward)) => format!("Prize: {}", reward.points),
        _ => String::new(),
    };
    f.render_widget(
        Paragraph::new(worth_text).alignment(Alignment::Center),
        chunks[2],
    );

    let stats_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_score
    );
    f.render_widget(
        Paragraph::new(stats_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}
