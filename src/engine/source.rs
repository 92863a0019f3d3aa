//! Word-source and id-generation capabilities
//!
//! Target selection and id generation sit behind traits so tests (and the
//! practice mode) can inject deterministic values instead of relying on
//! randomness.

use super::state::GameId;
use crate::core::Word;
use rand::prelude::IndexedRandom;

/// Supplies one target word per call
///
/// Contract: always returns a valid 5-letter word drawn from a non-empty pool.
pub trait WordSource {
    fn draw(&mut self) -> Word;
}

/// Uniform random pick from a fixed pool
pub struct PoolSource<'a> {
    pool: &'a [Word],
}

impl<'a> PoolSource<'a> {
    /// Create a source over `pool`
    ///
    /// Returns `None` for an empty pool, which keeps [`WordSource::draw`]
    /// infallible.
    #[must_use]
    pub const fn new(pool: &'a [Word]) -> Option<Self> {
        if pool.is_empty() {
            None
        } else {
            Some(Self { pool })
        }
    }
}

impl WordSource for PoolSource<'_> {
    fn draw(&mut self) -> Word {
        self.pool
            .choose(&mut rand::rng())
            .cloned()
            .expect("pool verified non-empty at construction")
    }
}

/// Always returns the same word
///
/// Used by tests and by the `--target` practice flag.
pub struct FixedSource {
    word: Word,
}

impl FixedSource {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self { word }
    }
}

impl WordSource for FixedSource {
    fn draw(&mut self) -> Word {
        self.word.clone()
    }
}

/// Generates a fresh id per game
pub trait IdSource {
    fn next_id(&mut self) -> GameId;
}

/// Random v4 UUIDs, the default id scheme
#[derive(Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> GameId {
        GameId::random()
    }
}
