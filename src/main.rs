//! Wordle Game - CLI
//!
//! Two-language Wordle with TUI and line modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_words},
    core::Word,
    game::DEFAULT_MAX_GUESSES,
    interactive::{App, run_tui},
    language::Language,
    logging::init_tracing,
    output::print_score_result,
    session::{Session, SessionConfig},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in English and Irish (Focail)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: 'en' (default) or 'ga' (Irish)
    #[arg(short, long, global = true, default_value = "en")]
    language: String,

    /// Number of guesses per round
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Use this word as the first round's target instead of a random pick
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Path to a custom word list (one word per line) replacing the built-in lists
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory for the log file (default: system temp dir)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (type a word, press Enter)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The target word
        target: String,

        /// The guess to score
        guess: String,
    },
}

/// Build the session configuration from CLI flags
fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let Some(language) = Language::from_name(&cli.language) else {
        bail!("Unknown language '{}': use 'en' or 'ga'", cli.language);
    };

    let custom_words: Option<Vec<Word>> = match &cli.wordlist {
        Some(path) => Some(
            load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?,
        ),
        None => None,
    };

    Ok(SessionConfig {
        language,
        max_guesses: cli.max_guesses,
        target: cli.target.clone(),
        custom_words,
        seed: cli.seed,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(std::env::temp_dir);
    let _guard = init_tracing(&log_dir)
        .with_context(|| format!("Failed to set up logging in {}", log_dir.display()))?;

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { target, guess } => run_score_command(target, guess),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let session = Session::new(session_config(cli)?)?;
    run_tui(App::new(session))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut session = Session::new(session_config(cli)?)?;
    run_simple(&mut session)
}

fn run_score_command(target: &str, guess: &str) -> Result<()> {
    let (guess, feedback) = score_words(target, guess)?;
    print_score_result(&guess, &feedback);
    Ok(())
}
