//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond small helpers, so they can
//! be shared by the core logic, the orchestration layer and the terminal front end.
//!
//! # Grid Convention
//!
//! A board is `height` rows by `width` columns. A [`CellPosition`] is always
//! `(row, col)` with `row < height` and `col < width`.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Input poll / render interval (~60 FPS) |
//! | `TIMER_TICK_MS` | 1000 | Countdown cadence |
//! | `MISMATCH_HIDE_MS` | 1000 | Delay before a mismatched pair hides again |
//! | `END_OF_GAME_MS` | 3000 | Summary display before the start prompt returns |
//! | `MESSAGE_MS` | 3000 | Auto-dismiss time for on-screen messages |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{CellPosition, InputEvent, DEFAULT_WIDTH, DEFAULT_HEIGHT};
//!
//! let pos = CellPosition::new(1, 2);
//! assert_eq!(pos.row, 1);
//! assert_eq!(pos.col, 2);
//! assert_eq!(pos.index(4), 6);
//!
//! let event = InputEvent::CellActivated(pos);
//! assert_eq!(event, InputEvent::CellActivated(CellPosition { row: 1, col: 2 }));
//!
//! assert_eq!(DEFAULT_WIDTH * DEFAULT_HEIGHT % 2, 0);
//! ```

use serde::{Deserialize, Serialize};

/// Default grid width in columns.
pub const DEFAULT_WIDTH: u16 = 4;

/// Default grid height in rows.
pub const DEFAULT_HEIGHT: u16 = 4;

/// Largest accepted grid side, in cells. Far beyond any terminal that could
/// show the grid; it only keeps board allocation bounded.
pub const MAX_GRID_SIDE: u16 = 64;

/// Default session time limit in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 60;

/// Input poll / render interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Countdown cadence: one timer tick per second.
pub const TIMER_TICK_MS: u32 = 1000;

/// How long a mismatched pair stays visible before hiding again.
pub const MISMATCH_HIDE_MS: u32 = 1000;

/// How long the end-of-game summary stays up before the start prompt returns.
pub const END_OF_GAME_MS: u32 = 3000;

/// Auto-dismiss time for on-screen messages.
pub const MESSAGE_MS: u32 = 3000;

/// Symbol value stored in a board cell. Values run from 1 to the pair count.
pub type Symbol = u32;

/// A board location, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: u16,
    pub col: u16,
}

impl CellPosition {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Row-major index into a grid with `cols` columns.
    pub const fn index(self, cols: u16) -> usize {
        (self.row as usize) * (cols as usize) + (self.col as usize)
    }

    /// Inverse of [`CellPosition::index`].
    pub const fn from_index(index: usize, cols: u16) -> Self {
        Self {
            row: (index / cols as usize) as u16,
            col: (index % cols as usize) as u16,
        }
    }
}

/// The only input the game reacts to.
///
/// Front ends translate their device events (mouse, keyboard, window focus)
/// into these before handing them to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Begin a new session from the start prompt.
    Start,
    /// The player picked a cell.
    CellActivated(CellPosition),
    /// The play surface lost focus (pauses the countdown).
    FocusLost,
    /// The play surface regained focus (resumes the countdown).
    FocusGained,
}

/// Notifications emitted by the countdown timer, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// One second elapsed; carries the remaining seconds.
    Tick(u32),
    /// Remaining time reached zero. Emitted at most once per run.
    Finished,
    /// The timer was stopped; carries the original duration for display.
    Reset(u32),
}

/// Visual theme passed through to the renderer. Opaque to the game logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Cell width in terminal columns.
    pub cell_width: u16,
    /// Cell height in terminal rows.
    pub cell_height: u16,
    pub hidden_bg: [u8; 3],
    pub revealed_bg: [u8; 3],
    /// Background of the cell under the keyboard cursor.
    pub cursor_bg: [u8; 3],
    pub symbol_fg: [u8; 3],
    pub border_fg: [u8; 3],
    pub text_fg: [u8; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            cell_width: 5,
            cell_height: 3,
            hidden_bg: [60, 70, 110],
            revealed_bg: [40, 120, 70],
            cursor_bg: [200, 150, 40],
            symbol_fg: [245, 245, 245],
            border_fg: [200, 200, 200],
            text_fg: [220, 220, 220],
        }
    }
}
