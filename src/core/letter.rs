//! Per-letter feedback classification
//!
//! Every guessed letter is classified against the target word:
//! - `Correct`: right letter, right position
//! - `Present`: right letter, wrong position
//! - `Absent`: letter not in the target (after exact matches are consumed)

use std::fmt;

/// Classification of one guessed letter relative to the target word
///
/// The variant order encodes aggregation priority: `Absent < Present < Correct`.
/// Knowledge about a letter only ever upgrades, so combining observations is
/// a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    /// Letter does not appear in the target (counting consumed occurrences)
    Absent,
    /// Letter appears in the target, but at a different position
    Present,
    /// Letter is at exactly this position in the target
    Correct,
}

impl LetterState {
    /// Combine two observations of the same letter, keeping the stronger one
    ///
    /// `Correct` is sticky: once a letter is known correct it never downgrades.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::LetterState;
    ///
    /// assert_eq!(
    ///     LetterState::Correct.merge(LetterState::Absent),
    ///     LetterState::Correct
    /// );
    /// assert_eq!(
    ///     LetterState::Absent.merge(LetterState::Present),
    ///     LetterState::Present
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Check whether this is an exact positional match
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert!(LetterState::Absent < LetterState::Present);
        assert!(LetterState::Present < LetterState::Correct);
    }

    #[test]
    fn merge_keeps_stronger_state() {
        assert_eq!(
            LetterState::Present.merge(LetterState::Absent),
            LetterState::Present
        );
        assert_eq!(
            LetterState::Absent.merge(LetterState::Correct),
            LetterState::Correct
        );
    }

    #[test]
    fn merge_correct_is_sticky() {
        for other in [
            LetterState::Absent,
            LetterState::Present,
            LetterState::Correct,
        ] {
            assert_eq!(LetterState::Correct.merge(other), LetterState::Correct);
            assert_eq!(other.merge(LetterState::Correct), LetterState::Correct);
        }
    }

    #[test]
    fn merge_is_idempotent() {
        for state in [
            LetterState::Absent,
            LetterState::Present,
            LetterState::Correct,
        ] {
            assert_eq!(state.merge(state), state);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(LetterState::Correct.to_string(), "correct");
        assert_eq!(LetterState::Present.to_string(), "present");
        assert_eq!(LetterState::Absent.to_string(), "absent");
    }
}
