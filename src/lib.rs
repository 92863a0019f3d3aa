//! Wordle Game
//!
//! A single-player word-guessing game built around a pure, immutable game
//! engine: guesses are scored letter-by-letter against a hidden target, and
//! every operation returns a fresh state snapshot.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterState, Word, evaluate};
//!
//! let target = Word::new("SLATE").unwrap();
//! let guess = Word::new("CRANE").unwrap();
//!
//! let result = evaluate(&target, &guess);
//! assert_eq!(result[2], LetterState::Correct); // A
//! assert_eq!(result[4], LetterState::Correct); // E
//! ```

// Core domain types
pub mod core;

// Game lifecycle engine
pub mod engine;

// Word pool
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
