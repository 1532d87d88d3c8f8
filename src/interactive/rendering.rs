//! TUI rendering with ratatui
//!
//! Grid, on-screen keyboard, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{Cell, Cursor, Key, KeyboardState, LetterState, Row};
use crate::game::Game;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let game = app.session.game();
    let grid_height = u16::try_from(game.max_guesses()).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(grid_height), // Grid
            Constraint::Length(5),           // Keyboard
            Constraint::Min(4),              // Messages
            Constraint::Length(1),           // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, game, chunks[1]);
    render_keyboard(f, game, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Colours for a tile or key in the given state
#[must_use]
pub fn state_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Default => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.session.language().title())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// One grid row as styled spans, highlighting the cursor cell
fn grid_line(row: &Row, row_index: usize, cursor: Cursor) -> Line<'static> {
    let spans: Vec<Span> = row
        .iter()
        .enumerate()
        .flat_map(|(col, cell): (usize, &Cell)| {
            let text = format!(" {} ", cell.letter.unwrap_or('·'));
            let mut style = state_style(cell.state);
            if row_index == cursor.row && col == cursor.col {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            [Span::styled(text, style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_grid(f: &mut Frame, game: &Game, area: Rect) {
    let lines: Vec<Line> = game
        .grid()
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| grid_line(row, i, game.cursor()))
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn keyboard_line(keys: &[Key], keyboard: &KeyboardState) -> Line<'static> {
    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|&key| {
            let style = match key {
                Key::Letter(letter) => state_style(keyboard.get(letter)),
                Key::Enter | Key::Backspace => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            };
            [Span::styled(format!(" {} ", key.label()), style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, game: &Game, area: Rect) {
    let lines: Vec<Line> = game
        .layout()
        .rows()
        .iter()
        .map(|keys| keyboard_line(keys, game.keyboard()))
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let language = Paragraph::new(format!("Language: {}", app.session.language()))
        .alignment(Alignment::Center);
    f.render_widget(language, chunks[0]);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game | Tab: Switch Language")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyboardLayout;
    use crate::session::{Session, SessionConfig};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn state_styles_are_distinct() {
        let styles = [
            state_style(LetterState::Default),
            state_style(LetterState::Absent),
            state_style(LetterState::Present),
            state_style(LetterState::Correct),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(state_style(LetterState::Correct).bg, Some(Color::Green));
    }

    #[test]
    fn grid_line_marks_cursor_cell() {
        let mut row: Row = [Cell::default(); 5];
        row[0] = Cell::typed('A');
        let line = grid_line(&row, 0, Cursor { row: 0, col: 1 });
        // Tile and spacer per cell
        assert_eq!(line.spans.len(), 10);
        assert_eq!(line.spans[0].content, " A ");
        assert!(line.spans[2].style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn keyboard_line_colours_letters() {
        let layout = KeyboardLayout::ENGLISH;
        let mut keyboard = KeyboardState::new(&layout);
        keyboard.upgrade('q', LetterState::Correct);
        let line = keyboard_line(layout.rows()[0], &keyboard);
        assert_eq!(line.spans[0].content, " Q ");
        assert_eq!(line.spans[0].style.bg, Some(Color::Green));
    }

    #[test]
    fn ui_renders_title_and_grid() {
        let session = Session::new(SessionConfig {
            target: Some("apple".to_string()),
            ..SessionConfig::default()
        })
        .unwrap();
        let mut app = App::new(session);
        app.handle_token("c");

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Wordle"));
        assert!(text.contains(" C "));
        assert!(text.contains("ENTER"));
    }
}
