//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is typed into the game one
//! letter at a time and submitted, exactly as if the keys had been pressed.

use crate::core::{Key, WORD_LENGTH};
use crate::game::{GameError, Outcome};
use crate::output::formatters::invalid_word_message;
use crate::output::{print_board, print_game_over, print_statistics};
use crate::session::Session;
use anyhow::Result;
use std::io::{self, Write};

/// What a line of input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// The row was submitted and scored
    Scored,
    /// Rejected; the row was cleared so the player can retype
    Rejected(String),
    NewGame,
    SwitchLanguage,
    Stats,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// round cannot be started.
pub fn run_simple(session: &mut Session) -> Result<()> {
    print_banner(session);

    loop {
        print_board(session);

        if session.game().status().is_over() {
            print_game_over(session);
            match get_user_input("Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    session.new_game()?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        let Some(line) = get_user_input("Guess")? else {
            break;
        };

        match handle_line(session, &line) {
            LineResult::Scored => {}
            LineResult::Rejected(message) => println!("{message}\n"),
            LineResult::NewGame => {
                session.new_game()?;
                println!("\n🔄 New game started!\n");
            }
            LineResult::SwitchLanguage => {
                session.switch_language()?;
                print_banner(session);
            }
            LineResult::Stats => print_statistics(session.stats()),
            LineResult::Quit => break,
        }
    }

    print_statistics(session.stats());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Apply one line of input to the session
///
/// Lines starting with `:` are commands (`:new`, `:lang`, `:stats`, `:quit`).
/// Anything else is typed letter by letter and submitted.
pub fn handle_line(session: &mut Session, line: &str) -> LineResult {
    let line = line.trim();

    match line.to_lowercase().as_str() {
        ":q" | ":quit" | ":exit" => return LineResult::Quit,
        ":n" | ":new" => return LineResult::NewGame,
        ":l" | ":lang" | ":language" => return LineResult::SwitchLanguage,
        ":s" | ":stats" => return LineResult::Stats,
        _ => {}
    }

    for letter in line.chars() {
        if let Err(err) = session.press(&letter.to_string()) {
            clear_row(session);
            return LineResult::Rejected(err.to_string());
        }
    }

    let result = match session.press(&Key::Enter.token()) {
        Ok(Outcome::Scored { .. }) => return LineResult::Scored,
        Ok(_) => LineResult::Rejected("Not enough letters".to_string()),
        Err(GameError::InvalidWord(word)) => LineResult::Rejected(invalid_word_message(&word)),
        Err(err) => LineResult::Rejected(err.to_string()),
    };

    clear_row(session);
    result
}

fn clear_row(session: &mut Session) {
    let backspace = Key::Backspace.token();
    while matches!(session.press(&backspace), Ok(Outcome::Deleted)) {}
}

fn print_banner(session: &Session) {
    use colored::Colorize;

    let title = session.language().title();
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║{}║", format!("{title:^46}").bright_green().bold());
    println!("╚══════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries. Type a word and press Enter.",
        WORD_LENGTH,
        session.game().max_guesses()
    );
    println!("Commands: ':new' new game, ':lang' switch language, ':stats', ':quit'\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}
