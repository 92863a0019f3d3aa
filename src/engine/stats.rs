//! Session statistics
//!
//! Aggregates finished games for the reporting views (TUI overlay and the
//! `stats` command in simple mode).

use super::state::{GameState, GameStatus};

/// Aggregate results across the games of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    games_played: usize,
    games_won: usize,
    current_streak: usize,
    best_streak: usize,
    /// Wins by number of guesses used; index 0 = won on the first guess
    guess_distribution: Vec<usize>,
}

impl SessionStats {
    /// Create empty statistics for games allowing `max_guesses` attempts
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            best_streak: 0,
            guess_distribution: vec![0; max_guesses],
        }
    }

    /// Fold one finished game into the totals
    ///
    /// Games still in progress are ignored.
    pub fn record(&mut self, game: &GameState) {
        match game.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);

                let used = game.guesses().len();
                if let Some(slot) = self.guess_distribution.get_mut(used.saturating_sub(1)) {
                    *slot += 1;
                }
            }
            GameStatus::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn games_played(&self) -> usize {
        self.games_played
    }

    #[inline]
    #[must_use]
    pub const fn games_won(&self) -> usize {
        self.games_won
    }

    #[inline]
    #[must_use]
    pub const fn current_streak(&self) -> usize {
        self.current_streak
    }

    #[inline]
    #[must_use]
    pub const fn best_streak(&self) -> usize {
        self.best_streak
    }

    /// Wins by number of guesses used; index 0 = won on the first guess
    #[inline]
    #[must_use]
    pub fn guess_distribution(&self) -> &[usize] {
        &self.guess_distribution
    }

    /// Fraction of finished games that were won, as a percentage
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
