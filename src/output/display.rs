//! Display functions for game results

use super::formatters::{colored_guess, distribution_bar, evaluation_to_emoji};
use crate::engine::{GameState, GameStatus, SessionStats};
use colored::Colorize;

/// Print the end-of-game summary with the guess history
pub fn print_game_summary(game: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());

    match game.status() {
        GameStatus::Won => {
            let attempts = game.guesses().len();
            println!(
                "{}",
                format!(
                    "  🎉 You won in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!("{}", "  😞 Game over".bright_red().bold());
            println!(
                "  The word was: {}",
                game.target().text().bright_yellow().bold()
            );
        }
        GameStatus::Playing => {
            println!("{}", "  Game still in progress".bright_white());
        }
    }

    println!("{}", "═".repeat(60).cyan());

    println!("\n  Guess history:");
    for (i, guess) in game.guesses().iter().enumerate() {
        println!(
            "    {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_guess(guess),
            evaluation_to_emoji(guess.result())
        );
    }

    if let Some(ended_at) = game.ended_at() {
        let seconds = (ended_at - game.started_at()).num_seconds();
        println!("\n  Time: {seconds}s");
    }

    println!();
}

/// Print session statistics as a small report
pub fn print_session_stats(stats: &SessionStats) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "SESSION STATISTICS".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("  Games played:   {}", stats.games_played());
    println!("  Games won:      {}", stats.games_won());
    println!("  Win rate:       {:.0}%", stats.win_rate());
    println!("  Current streak: {}", stats.current_streak());
    println!("  Best streak:    {}", stats.best_streak());

    let max = stats
        .guess_distribution()
        .iter()
        .copied()
        .max()
        .unwrap_or(0);

    println!("\n  Guess distribution:");
    for (i, &count) in stats.guess_distribution().iter().enumerate() {
        println!(
            "    {}: {} {}",
            i + 1,
            distribution_bar(count, max, 20),
            count
        );
    }

    println!();
}
