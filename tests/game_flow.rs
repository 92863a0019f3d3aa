//! End-to-end game flows through the public engine API

use wordle_game::core::{LetterState, Word, evaluate};
use wordle_game::engine::{
    Engine, FixedSource, GameConfig, GameStatus, PoolSource, UuidIds, used_letters,
};
use wordle_game::words::TARGETS;
use wordle_game::words::loader::words_from_slice;

fn engine_for(target: &str) -> Engine<FixedSource, UuidIds> {
    Engine::new(
        FixedSource::new(Word::new(target).unwrap()),
        UuidIds,
        GameConfig::default(),
    )
}

#[test]
fn full_game_win_on_second_guess() {
    let mut engine = engine_for("LIGHT");
    let game = engine.new_game();

    let game = game.update_current_guess("slate");
    assert_eq!(game.current_guess(), "SLATE");

    let game = game.make_guess("SLATE");
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.current_guess().is_empty());
    assert!(game.ended_at().is_none());

    let game = game.make_guess("LIGHT");
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.guesses().len(), 2);
    assert!(game.ended_at().is_some());
    assert!(game.guesses()[1].result().is_win());
}

#[test]
fn full_game_loss_reveals_consistent_history() {
    let mut engine = engine_for("LIGHT");
    let mut game = engine.new_game();

    for _ in 0..game.max_guesses() {
        game = game.make_guess("SLATE");
    }

    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.guesses().len(), game.max_guesses());
    assert_eq!(game.target().text(), "LIGHT");

    // Every recorded result matches a fresh evaluation of the same pair
    for guess in game.guesses() {
        assert_eq!(*guess.result(), evaluate(game.target(), guess.word()));
    }
}

#[test]
fn terminal_game_is_inert() {
    let mut engine = engine_for("LIGHT");
    let won = engine.new_game().make_guess("LIGHT");
    assert_eq!(won.status(), GameStatus::Won);

    let after_guess = won.make_guess("SLATE");
    let after_edit = won.update_current_guess("SLATE");

    assert_eq!(after_guess.guesses().len(), won.guesses().len());
    assert_eq!(after_guess.status(), GameStatus::Won);
    assert_eq!(after_guess.ended_at(), won.ended_at());
    assert_eq!(after_edit.current_guess(), won.current_guess());
}

#[test]
fn used_letters_accumulate_and_never_downgrade() {
    let mut engine = engine_for("LIGHT");
    let mut game = engine.new_game();

    // T misplaced first, exact later; L exact from the start
    game = game.make_guess("TRAIL");
    let after_first = used_letters(game.guesses());
    assert_eq!(after_first.get(&'T'), Some(&LetterState::Present));
    assert_eq!(after_first.get(&'R'), Some(&LetterState::Absent));

    game = game.make_guess("LIGHT");
    let after_second = used_letters(game.guesses());
    assert_eq!(after_second.get(&'T'), Some(&LetterState::Correct));
    assert_eq!(after_second.get(&'L'), Some(&LetterState::Correct));
    // Earlier absent knowledge is retained
    assert_eq!(after_second.get(&'R'), Some(&LetterState::Absent));
}

#[test]
fn new_games_get_distinct_ids_and_fresh_state() {
    let mut engine = engine_for("LIGHT");

    let first = engine.new_game().make_guess("SLATE");
    let second = engine.new_game();

    assert_ne!(first.id(), second.id());
    assert_eq!(second.status(), GameStatus::Playing);
    assert!(second.guesses().is_empty());
    assert!(second.current_guess().is_empty());
}

#[test]
fn pool_engine_draws_targets_from_pool() {
    let pool = words_from_slice(TARGETS);
    let source = PoolSource::new(&pool).unwrap();
    let mut engine = Engine::new(source, UuidIds, GameConfig::default());

    for _ in 0..10 {
        let game = engine.new_game();
        assert!(pool.contains(game.target()));
    }
}

#[test]
fn configured_guess_budget_drives_loss() {
    let source = FixedSource::new(Word::new("LIGHT").unwrap());
    let mut engine = Engine::new(source, UuidIds, GameConfig::new(2));
    let mut game = engine.new_game();

    game = game.make_guess("SLATE");
    assert_eq!(game.status(), GameStatus::Playing);

    game = game.make_guess("CRUMB");
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.guesses_remaining(), 0);
}

#[test]
fn buffer_edits_do_not_touch_history() {
    let mut engine = engine_for("LIGHT");
    let game = engine.new_game().make_guess("SLATE");

    let edited = game.update_current_guess("cru");
    assert_eq!(edited.guesses().len(), 1);
    assert_eq!(edited.current_guess(), "CRU");

    // The original snapshot is untouched
    assert!(game.current_guess().is_empty());
}
