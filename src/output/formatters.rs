//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterState};
use crate::engine::Guess;
use colored::Colorize;

/// Format an evaluation as an emoji tile row
#[must_use]
pub fn evaluation_to_emoji(result: &Evaluation) -> String {
    let mut output = String::with_capacity(20);

    for state in result.iter() {
        output.push(match state {
            LetterState::Correct => '🟩',
            LetterState::Present => '🟨',
            LetterState::Absent => '⬜',
        });
    }

    output
}

/// Format a guess as colored letter tiles for the terminal
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    let mut output = String::new();

    for (letter, state) in guess.word().letters().zip(guess.result().iter()) {
        let tile = format!(" {letter} ");
        let tile = match state {
            LetterState::Correct => tile.white().bold().on_green(),
            LetterState::Present => tile.black().bold().on_yellow(),
            LetterState::Absent => tile.white().on_bright_black(),
        };
        output.push_str(&tile.to_string());
    }

    output
}

/// Horizontal bar for the guess-distribution display
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((count as f64 / max as f64) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
