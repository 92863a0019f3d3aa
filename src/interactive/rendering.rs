//! TUI rendering with ratatui
//!
//! Board tiles, on-screen keyboard hints, and session statistics.

use super::app::{App, Message, MessageStyle};
use crate::core::{LetterState, WORD_LEN};
use crate::engine::{IdSource, WordSource};
use crate::output::formatters::distribution_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<W: WordSource, I: IdSource>(f: &mut Frame, app: &App<W, I>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(13),    // Board (or stats overlay)
            Constraint::Length(5),  // Keyboard
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if app.show_stats {
        render_stats(f, app, chunks[1]);
    } else {
        render_board(f, app, chunks[1]);
    }

    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board<W: WordSource, I: IdSource>(f: &mut Frame, app: &App<W, I>, area: Rect) {
    let game = &app.game;
    let mut lines: Vec<Line> = vec![Line::from("")];

    for row in 0..game.max_guesses() {
        let mut spans: Vec<Span> = Vec::with_capacity(WORD_LEN * 2);

        if let Some(guess) = game.guesses().get(row) {
            // Submitted row: colored tiles
            for (letter, state) in guess.word().letters().zip(guess.result().iter()) {
                spans.push(Span::styled(format!(" {letter} "), tile_style(state)));
                spans.push(Span::raw(" "));
            }
        } else if row == game.guesses().len() && !game.is_over() {
            // Active row: typed letters plus blanks
            let typed: Vec<char> = game.current_guess().chars().collect();
            for slot in 0..WORD_LEN {
                let span = typed.get(slot).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |letter| {
                        Span::styled(
                            format!(" {letter} "),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                        )
                    },
                );
                spans.push(span);
                spans.push(Span::raw(" "));
            }
        } else {
            // Future row
            for _ in 0..WORD_LEN {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<W: WordSource, I: IdSource>(f: &mut Frame, app: &App<W, I>, area: Rect) {
    let used = app.game.used_letters();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans: Vec<Span> = Vec::new();
            for letter in row.chars() {
                let style = used.get(&letter).map_or_else(
                    || Style::default().fg(Color::White),
                    |&state| tile_style(state),
                );
                spans.push(Span::styled(format!(" {letter} "), style));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_stats<W: WordSource, I: IdSource>(f: &mut Frame, app: &App<W, I>, area: Rect) {
    let stats = &app.stats;

    let mut lines = vec![
        Line::from(""),
        Line::from(format!("Games played:   {}", stats.games_played())),
        Line::from(format!("Games won:      {}", stats.games_won())),
        Line::from(format!("Win rate:       {:.0}%", stats.win_rate())),
        Line::from(format!("Current streak: {}", stats.current_streak())),
        Line::from(format!("Best streak:    {}", stats.best_streak())),
        Line::from(""),
        Line::from("Guess distribution:"),
    ];

    let max = stats
        .guess_distribution()
        .iter()
        .copied()
        .max()
        .unwrap_or(0);

    for (i, &count) in stats.guess_distribution().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::raw(format!("  {}: ", i + 1)),
            Span::styled(
                distribution_bar(count, max, 20),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Session Statistics (Tab to close) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(panel, area);
}

fn render_messages<W: WordSource, I: IdSource>(f: &mut Frame, app: &App<W, I>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|Message { text, style }| {
            let style = match style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(text.clone()).style(style)
        })
        .collect();

    let list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status<W: WordSource, I: IdSource>(f: &mut Frame, app: &App<W, I>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let progress = Paragraph::new(format!(
        "Guess: {}/{}",
        app.game.guesses().len(),
        app.game.max_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(progress, chunks[0]);

    let record = Paragraph::new(format!(
        "Games: {} | Win rate: {:.0}%",
        app.stats.games_played(),
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(record, chunks[1]);

    let help_text = if app.game.is_over() {
        "n: New Game | q: Quit | Tab: Stats"
    } else {
        "Type letters | Enter: Submit | Backspace | Tab: Stats | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
