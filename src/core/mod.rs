//! Core domain types for the Wordle game
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond hashing. All types here are pure, testable, and have clear mathematical
//! properties.

mod evaluation;
mod letter;
mod word;

pub use evaluation::{Evaluation, evaluate};
pub use letter::LetterState;
pub use word::{WORD_LEN, Word, WordError, is_valid_word};
