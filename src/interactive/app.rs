//! TUI application state and logic

use crate::core::{WORD_LEN, is_valid_word};
use crate::engine::{Engine, GameState, GameStatus, IdSource, SessionStats, WordSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<W: WordSource, I: IdSource> {
    engine: Engine<W, I>,
    pub game: GameState,
    pub stats: SessionStats,
    pub messages: Vec<Message>,
    pub show_stats: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<W: WordSource, I: IdSource> App<W, I> {
    #[must_use]
    pub fn new(mut engine: Engine<W, I>) -> Self {
        let stats = SessionStats::new(engine.config().max_guesses);
        let game = engine.new_game();

        let mut app = Self {
            engine,
            game,
            stats,
            messages: Vec::new(),
            show_stats: false,
            should_quit: false,
        };
        app.add_message("Guess the hidden 5-letter word!", MessageStyle::Info);
        app.add_message(
            "Type letters, Enter submits, Tab shows stats",
            MessageStyle::Info,
        );
        app
    }

    pub fn new_game(&mut self) {
        self.game = self.engine.new_game();
        self.messages.clear();
        self.show_stats = false;
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Append one typed letter to the input buffer
    pub fn push_letter(&mut self, letter: char) {
        if self.game.is_over() || self.game.current_guess().len() >= WORD_LEN {
            return;
        }

        let text = format!("{}{letter}", self.game.current_guess());
        self.game = self.game.update_current_guess(&text);
    }

    /// Remove the last letter from the input buffer
    pub fn backspace(&mut self) {
        let buffer = self.game.current_guess();
        if buffer.is_empty() {
            return;
        }

        let text: String = buffer.chars().take(buffer.len() - 1).collect();
        self.game = self.game.update_current_guess(&text);
    }

    /// Submit the current buffer as a guess
    pub fn submit_guess(&mut self) {
        let buffer = self.game.current_guess().to_string();

        if buffer.len() != WORD_LEN {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        if !is_valid_word(&buffer) {
            self.add_message("Invalid word", MessageStyle::Error);
            return;
        }

        self.game = self.game.make_guess(&buffer);

        match self.game.status() {
            GameStatus::Won => {
                self.stats.record(&self.game);

                let attempts = self.game.guesses().len();
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    _ => "🎉 You got it! 🎉",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.record(&self.game);

                let reveal = format!("The word was {}", self.game.target().text());
                self.add_message("😞 Out of guesses!", MessageStyle::Error);
                self.add_message(&reveal, MessageStyle::Info);
                self.add_message("Press 'n' for new game or 'q' to quit", MessageStyle::Info);
            }
            GameStatus::Playing => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_stats {
            match key.code {
                KeyCode::Tab | KeyCode::Esc => self.show_stats = false,
                _ => {}
            }
            return;
        }

        if self.game.is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Tab => self.show_stats = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_stats = true,
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.push_letter(c.to_ascii_uppercase());
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, I: IdSource>(app: App<W, I>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, W, I>(terminal: &mut Terminal<B>, mut app: App<W, I>) -> Result<()>
where
    B: ratatui::backend::Backend,
    W: WordSource,
    I: IdSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{FixedSource, GameConfig, UuidIds};

    fn app_for(target: &str) -> App<FixedSource, UuidIds> {
        App::new(Engine::new(
            FixedSource::new(Word::new(target).unwrap()),
            UuidIds,
            GameConfig::default(),
        ))
    }

    fn press(app: &mut App<FixedSource, UuidIds>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<FixedSource, UuidIds>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_buffer_uppercase() {
        let mut app = app_for("CRANE");
        type_word(&mut app, "sla");

        assert_eq!(app.game.current_guess(), "SLA");
    }

    #[test]
    fn buffer_caps_at_word_length() {
        let mut app = app_for("CRANE");
        type_word(&mut app, "slates");

        assert_eq!(app.game.current_guess(), "SLATE");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut app = app_for("CRANE");
        type_word(&mut app, "sla");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.game.current_guess(), "SL");
    }

    #[test]
    fn short_submission_is_rejected_with_message() {
        let mut app = app_for("CRANE");
        type_word(&mut app, "sla");
        press(&mut app, KeyCode::Enter);

        assert!(app.game.guesses().is_empty());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("Not enough letters"))
        );
    }

    #[test]
    fn winning_guess_updates_stats() {
        let mut app = app_for("CRANE");
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won(), 1);
    }

    #[test]
    fn losing_game_reveals_target() {
        let mut app = app_for("CRANE");
        for _ in 0..5 {
            type_word(&mut app, "slate");
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.game.status(), GameStatus::Lost);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
    }

    #[test]
    fn letters_are_ignored_once_game_is_over() {
        let mut app = app_for("CRANE");
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        type_word(&mut app, "slate");
        assert!(app.game.current_guess().is_empty());
    }

    #[test]
    fn new_game_key_resets_after_win() {
        let mut app = app_for("CRANE");
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.game.status(), GameStatus::Playing);
        assert!(app.game.guesses().is_empty());
    }

    #[test]
    fn stats_overlay_toggles() {
        let mut app = app_for("CRANE");
        press(&mut app, KeyCode::Tab);
        assert!(app.show_stats);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_stats);
    }

    #[test]
    fn escape_quits_while_playing() {
        let mut app = app_for("CRANE");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
