//! Guess evaluation
//!
//! Scores a guess against the target word, one `LetterState` per position.
//! Duplicate letters are handled with the standard two-pass rule: exact
//! matches consume their target letter first, then remaining letters can
//! satisfy at most one misplaced guess position each.

use super::letter::LetterState;
use super::word::{WORD_LEN, Word};
use std::fmt;
use std::ops::Index;

/// Per-position feedback for one guess
///
/// Immutable value type holding exactly one `LetterState` per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterState; WORD_LEN]);

impl Evaluation {
    /// All positions correct (winning feedback)
    pub const WIN: Self = Self([LetterState::Correct; WORD_LEN]);

    /// Create an evaluation from explicit per-position states
    #[inline]
    #[must_use]
    pub const fn from_states(states: [LetterState; WORD_LEN]) -> Self {
        Self(states)
    }

    /// Get the per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LEN] {
        &self.0
    }

    /// Iterate over the states in position order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.0.iter().copied()
    }

    /// Check whether every position is an exact match
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, evaluate};
    ///
    /// let target = Word::new("CRANE").unwrap();
    /// assert!(evaluate(&target, &target).is_win());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|state| state.is_correct())
    }
}

impl Index<usize> for Evaluation {
    type Output = LetterState;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl fmt::Display for Evaluation {
    /// Compact form: `G` correct, `Y` present, `-` absent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.0 {
            let ch = match state {
                LetterState::Correct => 'G',
                LetterState::Present => 'Y',
                LetterState::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Score `guess` against `target`
///
/// Implements the exact Wordle feedback rules, including proper handling
/// of duplicate letters.
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass: mark present-but-misplaced letters from the remaining pool;
///    each target letter occurrence satisfies at most one guess position
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterState, Word, evaluate};
///
/// let target = Word::new("SLATE").unwrap();
/// let guess = Word::new("CRANE").unwrap();
/// let result = evaluate(&target, &guess);
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(result[2], LetterState::Correct);
/// assert_eq!(result[4], LetterState::Correct);
/// assert_eq!(result[0], LetterState::Absent);
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Evaluation {
    let mut states = [LetterState::Absent; WORD_LEN];
    let mut available = target.char_counts();

    // First pass: exact matches consume their target letter
    // Allow: index needed to compare guess[i] with target[i] and set states[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess.char_at(i) == target.char_at(i) {
            states[i] = LetterState::Correct;

            if let Some(count) = available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters drawn from what remains
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if states[i] == LetterState::Absent {
            let letter = guess.char_at(i);
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                states[i] = LetterState::Present;
                *count -= 1;
            }
        }
    }

    Evaluation(states)
}
