//! TUI application state and logic

use crate::core::Key;
use crate::game::{GameError, GameStatus, Outcome};
use crate::output::formatters::{end_of_game_lines, invalid_word_message};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error};

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a terminal key asks the application to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    SwitchLanguage,
    /// Forwarded to the game dispatcher
    Key(String),
}

/// Map a terminal key event to an application command
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c' | 'C') if ctrl => Some(Command::Quit),
        KeyCode::Char('n' | 'N') if ctrl => Some(Command::NewGame),
        KeyCode::Tab => Some(Command::SwitchLanguage),
        KeyCode::Enter => Some(Command::Key(Key::Enter.token())),
        KeyCode::Backspace => Some(Command::Key(Key::Backspace.token())),
        KeyCode::Char(c) if !ctrl => Some(Command::Key(c.to_string())),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };
        app.welcome();
        app
    }

    fn welcome(&mut self) {
        let text = format!(
            "{}: guess the word in {} tries.",
            self.session.language().title(),
            self.session.game().max_guesses()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::NewGame => self.new_game(),
            Command::SwitchLanguage => self.switch_language(),
            Command::Key(token) => {
                if self.session.game().status().is_over() {
                    // Enter acts as "play again" once the round is over
                    if token == Key::Enter.token() {
                        self.new_game();
                    }
                    return;
                }
                self.handle_token(&token);
            }
        }
    }

    pub fn handle_token(&mut self, token: &str) {
        match self.session.press(token) {
            Ok(Outcome::Scored { status, .. }) if status.is_over() => {
                let style = if status == GameStatus::Won {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                let lines = end_of_game_lines(self.session.game(), self.session.meaning());
                for line in lines {
                    self.add_message(&line, style);
                }
                self.add_message("Press Enter to play again.", MessageStyle::Info);
            }
            Ok(_) => {}
            Err(GameError::InvalidWord(word)) => {
                self.add_message(&invalid_word_message(&word), MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        match self.session.new_game() {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => {
                error!(%err, "could not start a new game");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn switch_language(&mut self) {
        match self.session.switch_language() {
            Ok(()) => {
                self.messages.clear();
                self.welcome();
            }
            Err(err) => {
                error!(%err, "could not switch language");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "TUI loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(command) = map_key(key) {
                debug!(?command, "key command");
                app.handle_command(command);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::session::SessionConfig;

    fn app_with_target(target: &str) -> App {
        App::new(
            Session::new(SessionConfig {
                target: Some(target.to_string()),
                seed: Some(5),
                ..SessionConfig::default()
            })
            .unwrap(),
        )
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_command(Command::Key(c.to_string()));
        }
        app.handle_command(Command::Key("ENTER".to_string()));
    }

    #[test]
    fn map_control_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Command::NewGame)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Tab)),
            Some(Command::SwitchLanguage)
        );
    }

    #[test]
    fn map_game_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(Command::Key("ENTER".to_string()))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Backspace)),
            Some(Command::Key("BACKSPACE".to_string()))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('á'))),
            Some(Command::Key("á".to_string()))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(1))), None);
    }

    #[test]
    fn invalid_word_shows_error_message() {
        let mut app = app_with_target("apple");
        type_keys(&mut app, "zzzzz");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("ZZZZZ"));
    }

    #[test]
    fn win_shows_banner_and_enter_starts_new_game() {
        let mut app = app_with_target("apple");
        type_keys(&mut app, "apple");
        assert_eq!(app.session.game().status(), GameStatus::Won);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success && m.text.contains("You won"))
        );

        // Letters are ignored until the next round
        app.handle_command(Command::Key("a".to_string()));
        assert_eq!(app.session.game().status(), GameStatus::Won);

        app.handle_command(Command::Key("ENTER".to_string()));
        assert_eq!(app.session.game().status(), GameStatus::Playing);
        assert_eq!(app.session.stats().games_won, 1);
    }

    #[test]
    fn tab_switches_language() {
        let mut app = app_with_target("apple");
        app.handle_command(Command::SwitchLanguage);
        assert_eq!(app.session.language(), Language::Irish);
        assert!(app.messages[0].text.starts_with("Focail"));
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app_with_target("apple");
        app.handle_command(Command::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app_with_target("apple");
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
