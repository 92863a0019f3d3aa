//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Input comes from any `BufRead`, so the
//! whole loop is testable with a cursor over scripted lines.

use crate::core::{WORD_LEN, is_valid_word};
use crate::engine::{Engine, IdSource, SessionStats, WordSource};
use crate::output::formatters::{colored_guess, evaluation_to_emoji};
use crate::output::{print_game_summary, print_session_stats};
use std::io::{self, BufRead, Write};

/// Run the simple line-based game mode
///
/// Reads guesses from `reader` until the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<W, I, R>(engine: &mut Engine<W, I>, mut reader: R) -> Result<(), String>
where
    W: WordSource,
    I: IdSource,
    R: BufRead,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    W O R D L E                               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word.");
    println!("After each guess the tiles show what you learned:\n");
    println!("  🟩 right letter, right position");
    println!("  🟨 right letter, wrong position");
    println!("  ⬜ letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'report' for session stats\n");

    let mut stats = SessionStats::new(engine.config().max_guesses);
    let mut game = engine.new_game();

    loop {
        let prompt = format!(
            "Guess {}/{}",
            game.guesses().len() + 1,
            game.max_guesses()
        );
        let Some(input) = read_input(&mut reader, &prompt)? else {
            break; // input ended
        };
        let input = input.to_uppercase();

        match input.as_str() {
            "QUIT" | "EXIT" | "Q" => {
                println!("\n👋 Thanks for playing!\n");
                break;
            }
            "NEW" => {
                game = engine.new_game();
                println!("\n🔄 New game started!\n");
                continue;
            }
            // Commands are all non-5-letter words so they can never shadow a guess
            "REPORT" => {
                print_session_stats(&stats);
                continue;
            }
            _ => {}
        }

        if !is_valid_word(&input) {
            if input.len() == WORD_LEN {
                println!("❌ Invalid word. Letters only, please.\n");
            } else {
                println!("❌ Not enough letters. Enter a 5-letter word.\n");
            }
            continue;
        }

        game = game.make_guess(&input);

        if let Some(guess) = game.guesses().last() {
            println!(
                "\n  {}  {}\n",
                colored_guess(guess),
                evaluation_to_emoji(guess.result())
            );
        }

        if game.is_over() {
            stats.record(&game);
            print_game_summary(&game);

            let Some(answer) = read_input(&mut reader, "Play again? (y/n)")? else {
                break;
            };
            match answer.to_lowercase().as_str() {
                "y" | "yes" => {
                    game = engine.new_game();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    print_session_stats(&stats);
                    println!("👋 Thanks for playing!\n");
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Prompt and read one trimmed line; `None` when input is exhausted
fn read_input<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;

    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(input.trim().to_string()))
    }
}
