//! Word pool loading utilities
//!
//! Functions to turn the embedded list or a custom file into validated
//! `Word` pools.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word pool from a file, one word per line
///
/// Returns a vector of valid `Word` instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::words::loader::load_from_file;
///
/// let pool = load_from_file("data/targets.txt").unwrap();
/// println!("Loaded {} words", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word pool
///
/// # Examples
/// ```
/// use wordle_game::words::TARGETS;
/// use wordle_game::words::loader::words_from_slice;
///
/// let pool = words_from_slice(TARGETS);
/// assert_eq!(pool.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
