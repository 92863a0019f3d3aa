//! Game lifecycle state
//!
//! `GameState` is an immutable snapshot: every operation returns a new state
//! and never mutates its input. That keeps the engine trivially testable and
//! replayable, and lets the host discard a returned state to "cancel".

use super::GameConfig;
use super::letters::used_letters;
use crate::core::{Evaluation, LetterState, WORD_LEN, Word, evaluate};
use chrono::{DateTime, Utc};
use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameId(Uuid);

impl GameId {
    /// Wrap an existing identifier
    #[inline]
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a game is in its lifecycle
///
/// Transitions are one-way: `Playing -> Won` and `Playing -> Lost`.
/// Terminal states never revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Check whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One submitted guess with its evaluation
///
/// Immutable once created; the guess history is append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    result: Evaluation,
}

impl Guess {
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn result(&self) -> &Evaluation {
        &self.result
    }
}

/// Full state of one game session
///
/// Created by [`crate::engine::Engine::new_game`], then advanced through
/// [`GameState::update_current_guess`] and [`GameState::make_guess`]. The
/// target stays hidden from display code until the game ends.
#[derive(Debug, Clone)]
pub struct GameState {
    id: GameId,
    target: Word,
    guesses: Vec<Guess>,
    current_guess: String,
    status: GameStatus,
    max_guesses: usize,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl GameState {
    /// Create a fresh game around the given target
    ///
    /// Status starts at `Playing` with empty guess history and input buffer.
    #[must_use]
    pub fn new(id: GameId, target: Word, config: &GameConfig) -> Self {
        debug!("new game {id}: target drawn, max_guesses={}", config.max_guesses);

        Self {
            id,
            target,
            guesses: Vec::new(),
            current_guess: String::new(),
            status: GameStatus::Playing,
            max_guesses: config.max_guesses,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// Replace the in-progress input buffer
    ///
    /// Returns the state unchanged if the game is over. Otherwise the text is
    /// uppercased and truncated to 5 characters. Letter-only content is not
    /// enforced here; that check belongs to submission time.
    #[must_use]
    pub fn update_current_guess(&self, text: &str) -> Self {
        if self.status != GameStatus::Playing {
            return self.clone();
        }

        let mut next = self.clone();
        next.current_guess = text.to_uppercase().chars().take(WORD_LEN).collect();
        next
    }

    /// Submit a guess and advance the state machine
    ///
    /// No-op (state returned unchanged, buffer preserved) if the game is over
    /// or the guess is not exactly 5 letters. Otherwise the guess is evaluated
    /// and appended, the input buffer is cleared, and the status transition
    /// runs: all-correct wins; using the final allowed guess without winning
    /// loses; anything else keeps playing. `ended_at` is set exactly once, at
    /// the transition into a terminal status.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::engine::{GameConfig, GameId, GameState, GameStatus};
    ///
    /// let target = Word::new("CRANE").unwrap();
    /// let game = GameState::new(GameId::random(), target, &GameConfig::default());
    ///
    /// let game = game.make_guess("SLATE");
    /// assert_eq!(game.status(), GameStatus::Playing);
    ///
    /// let game = game.make_guess("CRANE");
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn make_guess(&self, guess: &str) -> Self {
        if self.status != GameStatus::Playing {
            return self.clone();
        }

        // Malformed input is rejected defensively, not raised
        let Ok(word) = Word::new(guess) else {
            debug!("game {}: rejected malformed guess {guess:?}", self.id);
            return self.clone();
        };

        let result = evaluate(&self.target, &word);

        let mut next = self.clone();
        next.guesses.push(Guess { word, result });
        next.current_guess.clear();

        if result.is_win() {
            next.status = GameStatus::Won;
            next.ended_at = Some(Utc::now());
            debug!("game {}: won in {} guesses", next.id, next.guesses.len());
        } else if next.guesses.len() >= next.max_guesses {
            next.status = GameStatus::Lost;
            next.ended_at = Some(Utc::now());
            debug!("game {}: lost, target was {}", next.id, next.target);
        }

        next
    }

    /// Best-known state of every letter seen so far, for keyboard hints
    ///
    /// Recomputed in full from the guess history on every call.
    #[must_use]
    pub fn used_letters(&self) -> FxHashMap<char, LetterState> {
        used_letters(&self.guesses)
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// The hidden target word
    ///
    /// Display code must only reveal this once [`GameState::is_over`] is true.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[inline]
    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Guesses still available before the game is lost
    #[inline]
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }
}
