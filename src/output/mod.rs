//! Terminal output formatting
//!
//! Display utilities for the line-based game mode.

pub mod display;
pub mod formatters;

pub use display::{print_game_summary, print_session_stats};
