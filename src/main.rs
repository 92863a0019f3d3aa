//! Wordle Game - CLI
//!
//! Single-player Wordle with TUI and simple line modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use wordle_game::{
    commands::run_simple,
    core::Word,
    engine::{DEFAULT_MAX_GUESSES, Engine, FixedSource, GameConfig, PoolSource, UuidIds, WordSource},
    interactive::{App, run_tui},
    words::{
        TARGETS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Single-player Wordle: guess the hidden 5-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default, 30 words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Maximum guesses per game
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Practice mode: pin the target word instead of drawing randomly
    #[arg(short, long, global = true)]
    target: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load the target pool based on the -w flag
fn load_pool(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "builtin" => Ok(words_from_slice(TARGETS)),
        path => {
            let pool = load_from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            if pool.is_empty() {
                bail!("Word list {path} contains no valid 5-letter words");
            }
            Ok(pool)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.max_guesses == 0 {
        bail!("--max-guesses must be at least 1");
    }
    let config = GameConfig::new(cli.max_guesses);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match cli.target {
        Some(target) => {
            let word = Word::new(&target).context("Invalid practice target")?;
            let engine = Engine::new(FixedSource::new(word), UuidIds, config);
            dispatch(&command, engine)
        }
        None => {
            let pool = load_pool(&cli.wordlist)?;
            let source = PoolSource::new(&pool).context("Word pool is empty")?;
            let engine = Engine::new(source, UuidIds, config);
            dispatch(&command, engine)
        }
    }
}

fn dispatch<W: WordSource>(command: &Commands, mut engine: Engine<W, UuidIds>) -> Result<()> {
    match command {
        Commands::Play => run_tui(App::new(engine)),
        Commands::Simple => {
            run_simple(&mut engine, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
