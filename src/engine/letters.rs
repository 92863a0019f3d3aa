//! Aggregated letter knowledge
//!
//! Folds the guess history into the best-known state per letter, for
//! keyboard-hint display.

use super::state::Guess;
use crate::core::LetterState;
use rustc_hash::FxHashMap;

/// Best-known state of every letter seen across `guesses`
///
/// Aggregation keeps the maximum-priority observation per letter
/// (`Correct > Present > Absent`), so a letter once known correct never
/// downgrades. The map is recomputed in full from the history on every call
/// rather than tracked incrementally.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterState, Word};
/// use wordle_game::engine::{GameConfig, GameId, GameState, used_letters};
///
/// let target = Word::new("CRANE").unwrap();
/// let game = GameState::new(GameId::random(), target, &GameConfig::default())
///     .make_guess("SLATE");
///
/// let used = used_letters(game.guesses());
/// assert_eq!(used.get(&'E'), Some(&LetterState::Correct));
/// assert_eq!(used.get(&'S'), Some(&LetterState::Absent));
/// ```
#[must_use]
pub fn used_letters(guesses: &[Guess]) -> FxHashMap<char, LetterState> {
    let mut used: FxHashMap<char, LetterState> = FxHashMap::default();

    for guess in guesses {
        for (letter, state) in guess.word().letters().zip(guess.result().iter()) {
            used.entry(letter)
                .and_modify(|known| *known = known.merge(state))
                .or_insert(state);
        }
    }

    used
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{GameConfig, GameId, GameState};

    fn game_with(target: &str, guesses: &[&str]) -> GameState {
        let mut game = GameState::new(
            GameId::random(),
            Word::new(target).unwrap(),
            &GameConfig::default(),
        );
        for guess in guesses {
            game = game.make_guess(guess);
        }
        game
    }

    #[test]
    fn empty_history_yields_empty_map() {
        let game = game_with("CRANE", &[]);
        assert!(used_letters(game.guesses()).is_empty());
    }

    #[test]
    fn single_guess_maps_each_letter() {
        let game = game_with("CRANE", &["SLATE"]);
        let used = used_letters(game.guesses());

        assert_eq!(used.get(&'S'), Some(&LetterState::Absent));
        assert_eq!(used.get(&'L'), Some(&LetterState::Absent));
        assert_eq!(used.get(&'A'), Some(&LetterState::Correct));
        assert_eq!(used.get(&'T'), Some(&LetterState::Absent));
        assert_eq!(used.get(&'E'), Some(&LetterState::Correct));
        assert!(!used.contains_key(&'C'));
    }

    #[test]
    fn later_stronger_observation_upgrades() {
        // R is misplaced in the first guess, exact in the second
        let game = game_with("CRANE", &["ROBIN", "CRUMB"]);
        let used = used_letters(game.guesses());

        assert_eq!(used.get(&'R'), Some(&LetterState::Correct));
        assert_eq!(used.get(&'C'), Some(&LetterState::Correct));
    }

    #[test]
    fn correct_is_sticky_across_later_weaker_observations() {
        // E is exact in SLATE; in QUEEN one E lands elsewhere
        let game = game_with("CRANE", &["SLATE", "QUEEN"]);
        let used = used_letters(game.guesses());

        assert_eq!(used.get(&'E'), Some(&LetterState::Correct));
    }

    #[test]
    fn aggregation_is_order_independent() {
        let forward = game_with("CRANE", &["SLATE", "ROBIN"]);
        let backward = game_with("CRANE", &["ROBIN", "SLATE"]);

        assert_eq!(
            used_letters(forward.guesses()),
            used_letters(backward.guesses())
        );
    }

    #[test]
    fn duplicate_letter_takes_best_position_state() {
        // Target SPEED: EEEEE marks positions 2 and 3 correct, the rest absent.
        // The aggregate for E must be Correct.
        let game = game_with("SPEED", &["EEEEE"]);
        let used = used_letters(game.guesses());

        assert_eq!(used.get(&'E'), Some(&LetterState::Correct));
    }
}
