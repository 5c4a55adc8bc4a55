//! Keyboard cursor and terminal event translation.
//!
//! The cursor lets the game be played without a mouse: arrow keys move a
//! highlight over the grid and Enter/Space activates the highlighted cell.
//! Mouse clicks need the on-screen layout, so they are hit-tested by the
//! renderer and only passed through here.

use crossterm::event::{Event, KeyEventKind};

use crate::map::{handle_key_event, Direction, KeyAction};
use crate::types::{CellPosition, InputEvent};

/// Highlighted cell for keyboard play. Clamped to the grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: CellPosition,
    rows: u16,
    cols: u16,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            pos: CellPosition::new(0, 0),
            rows: 0,
            cols: 0,
        }
    }

    /// Resize to a new grid, keeping the position when it still fits.
    pub fn fit(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
        self.pos.row = self.pos.row.min(rows.saturating_sub(1));
        self.pos.col = self.pos.col.min(cols.saturating_sub(1));
    }

    /// `None` when there is no grid to point at.
    pub fn position(&self) -> Option<CellPosition> {
        (self.rows > 0 && self.cols > 0).then_some(self.pos)
    }

    /// Move the cursor onto `pos`, e.g. after a mouse click.
    pub fn jump_to(&mut self, pos: CellPosition) {
        if pos.row < self.rows && pos.col < self.cols {
            self.pos = pos;
        }
    }

    pub fn step(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.pos.row = self.pos.row.saturating_sub(1),
            Direction::Down => {
                if self.pos.row + 1 < self.rows {
                    self.pos.row += 1;
                }
            }
            Direction::Left => self.pos.col = self.pos.col.saturating_sub(1),
            Direction::Right => {
                if self.pos.col + 1 < self.cols {
                    self.pos.col += 1;
                }
            }
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns keyboard and focus events into [`InputEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    cursor: Cursor,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Translate one terminal event.
    ///
    /// `awaiting_start` is true while the start prompt is visible; activation
    /// keys then start a session instead of picking a cell. Mouse events are
    /// not handled here.
    pub fn handle_event(&mut self, event: &Event, awaiting_start: bool) -> Option<InputEvent> {
        match event {
            Event::FocusLost => Some(InputEvent::FocusLost),
            Event::FocusGained => Some(InputEvent::FocusGained),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handle_key_event(*key)? {
                    KeyAction::Move(dir) => {
                        self.cursor.step(dir);
                        None
                    }
                    KeyAction::NewGame => awaiting_start.then_some(InputEvent::Start),
                    KeyAction::Activate if awaiting_start => Some(InputEvent::Start),
                    KeyAction::Activate => self.cursor.position().map(InputEvent::CellActivated),
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_cursor_clamps_to_grid() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.position(), None);

        cursor.fit(2, 3);
        assert_eq!(cursor.position(), Some(CellPosition::new(0, 0)));

        cursor.step(Direction::Up);
        cursor.step(Direction::Left);
        assert_eq!(cursor.position(), Some(CellPosition::new(0, 0)));

        for _ in 0..5 {
            cursor.step(Direction::Right);
            cursor.step(Direction::Down);
        }
        assert_eq!(cursor.position(), Some(CellPosition::new(1, 2)));
    }

    #[test]
    fn test_cursor_fit_shrinks_position() {
        let mut cursor = Cursor::new();
        cursor.fit(4, 4);
        cursor.jump_to(CellPosition::new(3, 3));
        cursor.fit(2, 2);
        assert_eq!(cursor.position(), Some(CellPosition::new(1, 1)));

        cursor.jump_to(CellPosition::new(5, 0));
        assert_eq!(cursor.position(), Some(CellPosition::new(1, 1)));
    }

    #[test]
    fn test_activate_starts_when_awaiting() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.handle_event(&key(KeyCode::Enter), true),
            Some(InputEvent::Start)
        );
        assert_eq!(
            handler.handle_event(&key(KeyCode::Char('n')), true),
            Some(InputEvent::Start)
        );
        assert_eq!(handler.handle_event(&key(KeyCode::Char('n')), false), None);
    }

    #[test]
    fn test_activate_picks_cursor_cell() {
        let mut handler = InputHandler::new();
        // No grid yet.
        assert_eq!(handler.handle_event(&key(KeyCode::Enter), false), None);

        handler.cursor_mut().fit(4, 4);
        handler.handle_event(&key(KeyCode::Right), false);
        handler.handle_event(&key(KeyCode::Down), false);
        assert_eq!(
            handler.handle_event(&key(KeyCode::Char(' ')), false),
            Some(InputEvent::CellActivated(CellPosition::new(1, 1)))
        );
    }

    #[test]
    fn test_focus_events() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.handle_event(&Event::FocusLost, false),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(
            handler.handle_event(&Event::FocusGained, true),
            Some(InputEvent::FocusGained)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut handler = InputHandler::new();
        handler.cursor_mut().fit(2, 2);
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Enter,
            crossterm::event::KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(handler.handle_event(&release, false), None);
    }
}
