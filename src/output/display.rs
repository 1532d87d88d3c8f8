//! Display functions for line-mode play and command results

use super::formatters::{end_of_game_lines, feedback_line, keyboard_lines, row_line};
use crate::core::{Feedback, Word};
use crate::game::GameStatus;
use crate::session::{Session, Statistics};
use colored::Colorize;

/// Print the scored rows, the row being typed, and the keyboard
pub fn print_board(session: &Session) {
    let game = session.game();
    println!();
    for row in game.grid().rows().iter().take(game.cursor().row + 1) {
        println!("   {}", row_line(row));
    }
    println!();
    for (indent, line) in keyboard_lines(game.layout(), game.keyboard())
        .iter()
        .enumerate()
    {
        println!("{}{line}", " ".repeat(indent + 1));
    }
    println!();
}

/// Print the banner for a finished round, with the share grid
pub fn print_game_over(session: &Session) {
    let game = session.game();
    let lines = end_of_game_lines(game, session.meaning());
    if lines.is_empty() {
        return;
    }

    println!("{}", "═".repeat(50).bright_cyan());
    for line in &lines {
        match game.status() {
            GameStatus::Won => println!("  {}", line.bright_green().bold()),
            _ => println!("  {}", line.bright_red().bold()),
        }
    }
    println!("{}", "═".repeat(50).bright_cyan());
    println!(
        "\n{} {}\n",
        session.language().title().bright_white().bold(),
        game.share_text()
    );
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:   {}", stats.games_played);
    println!("   Win rate: {:.0}%", stats.win_rate());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = "█".repeat(count).green();
        println!("   {}: {bar} {count}", i + 1);
    }
}

/// Print the result of scoring one guess against a target
pub fn print_score_result(guess: &Word, feedback: &Feedback) {
    println!("\n   {}   {}", feedback_line(guess, feedback), feedback.to_emoji());
    if feedback.is_win() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}
