//! Game engine
//!
//! Owns the game lifecycle: target selection, id generation, the pure state
//! transitions, letter-knowledge aggregation, and session statistics. The
//! engine performs no I/O and holds no shared mutable state; hosts advance a
//! game by replacing their `GameState` snapshot with the returned one.

mod letters;
mod source;
mod state;
mod stats;

pub use letters::used_letters;
pub use source::{FixedSource, IdSource, PoolSource, UuidIds, WordSource};
pub use state::{GameId, GameState, GameStatus, Guess};
pub use stats::SessionStats;

use log::info;

/// Default number of guesses a game allows
pub const DEFAULT_MAX_GUESSES: usize = 5;

/// Per-deployment game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_guesses: usize) -> Self {
        Self { max_guesses }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES)
    }
}

/// Creates games from a word source and an id source
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::engine::{Engine, FixedSource, GameConfig, GameStatus, UuidIds};
///
/// let source = FixedSource::new(Word::new("CRANE").unwrap());
/// let mut engine = Engine::new(source, UuidIds, GameConfig::default());
///
/// let game = engine.new_game();
/// assert_eq!(game.status(), GameStatus::Playing);
/// assert_eq!(game.target().text(), "CRANE");
/// ```
pub struct Engine<W: WordSource, I: IdSource> {
    words: W,
    ids: I,
    config: GameConfig,
}

impl<W: WordSource, I: IdSource> Engine<W, I> {
    #[must_use]
    pub const fn new(words: W, ids: I, config: GameConfig) -> Self {
        Self {
            words,
            ids,
            config,
        }
    }

    /// Start a fresh game with a newly drawn target and id
    pub fn new_game(&mut self) -> GameState {
        let id = self.ids.next_id();
        let target = self.words.draw();
        info!("starting game {id}");

        GameState::new(id, target, &self.config)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    struct SequentialIds(u128);

    impl IdSource for SequentialIds {
        fn next_id(&mut self) -> GameId {
            self.0 += 1;
            GameId::from_uuid(uuid::Uuid::from_u128(self.0))
        }
    }

    #[test]
    fn new_game_uses_injected_sources() {
        let source = FixedSource::new(Word::new("MAGIC").unwrap());
        let mut engine = Engine::new(source, SequentialIds(0), GameConfig::default());

        let first = engine.new_game();
        let second = engine.new_game();

        assert_eq!(first.target().text(), "MAGIC");
        assert_eq!(second.target().text(), "MAGIC");
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn new_game_applies_config() {
        let source = FixedSource::new(Word::new("MAGIC").unwrap());
        let mut engine = Engine::new(source, UuidIds, GameConfig::new(3));

        let game = engine.new_game();
        assert_eq!(game.max_guesses(), 3);
    }

    #[test]
    fn new_game_draws_from_pool() {
        let pool: Vec<Word> = ["CRANE", "SLATE"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let source = PoolSource::new(&pool).unwrap();
        let mut engine = Engine::new(source, UuidIds, GameConfig::default());

        let game = engine.new_game();
        assert!(pool.contains(game.target()));
    }
}
