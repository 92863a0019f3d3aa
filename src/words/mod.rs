//! Target-word pool
//!
//! Provides the embedded word list compiled into the binary, plus a loader
//! for substituting a custom pool from a file.

mod embedded;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn targets_are_valid_words() {
        // All targets should be 5 letters, uppercase
        for &word in TARGETS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn targets_are_unique() {
        let unique: std::collections::HashSet<_> = TARGETS.iter().collect();
        assert_eq!(unique.len(), TARGETS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(TARGETS_COUNT, 30, "Expected 30 target words");
    }
}
