//! Keyboard and mouse input mapping.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::game::Position;
use crate::geometry::Point;
use crate::view::TerminalSurface;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the selection cursor.
    Cursor(Position),
    /// Play at a cell.
    Play(Position),
    /// Start a new match.
    Reset,
    /// Leave the client.
    Quit,
}

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::new(row, col).unwrap_or(cursor)
}

/// Maps a key press to a command.
///
/// Digits 1-9 play directly, numbered left to right, top to bottom.
pub fn key_command(cursor: Position, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Play(cursor)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|digit| (1..=9).contains(digit))
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::Play),
        code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
            Some(Command::Cursor(move_cursor(cursor, code)))
        }
        _ => None,
    }
}

/// Maps a left click on a cell to a play command.
pub fn mouse_command(surface: &TerminalSurface, mouse: MouseEvent) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => surface
            .cell_at(Point::new(f64::from(mouse.column), f64::from(mouse.row)))
            .map(Command::Play),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(pos(0, 0), KeyCode::Left), pos(0, 0));
        assert_eq!(move_cursor(pos(0, 0), KeyCode::Up), pos(0, 0));
        assert_eq!(move_cursor(pos(2, 2), KeyCode::Right), pos(2, 2));
        assert_eq!(move_cursor(pos(1, 1), KeyCode::Down), pos(2, 1));
    }

    #[test]
    fn test_digits_play_cells() {
        assert_eq!(
            key_command(pos(0, 0), key(KeyCode::Char('5'))),
            Some(Command::Play(pos(1, 1)))
        );
        assert_eq!(
            key_command(pos(0, 0), key(KeyCode::Char('9'))),
            Some(Command::Play(pos(2, 2)))
        );
        assert_eq!(key_command(pos(0, 0), key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_enter_plays_cursor() {
        assert_eq!(
            key_command(pos(2, 0), key(KeyCode::Enter)),
            Some(Command::Play(pos(2, 0)))
        );
        let reset = key_command(pos(2, 0), key(KeyCode::Char('r')));
        assert_eq!(reset, Some(Command::Reset));
    }
}
