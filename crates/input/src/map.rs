//! Key mapping from terminal events to menu/cursor actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key press asks for, before it is tied to the cursor or game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Move(Direction),
    /// Pick the cell under the cursor, or start a game from the prompt.
    Activate,
    /// Start a game from the prompt.
    NewGame,
}

/// Map keyboard input to actions.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyAction::Move(Direction::Down))
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Activate),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(KeyAction::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
