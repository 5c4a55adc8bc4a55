//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game: how boards are dealt,
//! how a turn of two picks is resolved, and how the session countdown runs.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: Time is fed in explicitly, so timers are tested without sleeping
//! - **Portable**: Can be driven by any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: paired symbol grid and the shuffling [`BoardGenerator`]
//! - [`game_state`]: selection slots, match/mismatch resolution, score
//! - [`rng`]: seeded LCG with an unbiased Fisher-Yates shuffle
//! - [`timer`]: pausable countdown emitting [`TimerEvent`](crate::types::TimerEvent)s
//!
//! # Game Rules
//!
//! - A board of `height` x `width` cells holds every symbol `1..=cells/2` twice
//! - Each turn reveals two cells; equal symbols stay revealed and score a pair
//! - Unequal symbols hide again after a delay, and no pick is accepted until then
//! - The session ends when all pairs are found or the countdown reaches zero
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Board, GameState, SelectionResult};
//! use tui_memory_types::CellPosition;
//!
//! let board = Board::from_rows(&[vec![1, 2], vec![2, 1]]).unwrap();
//! let mut game = GameState::new(board);
//!
//! game.select_cell(CellPosition::new(0, 0));
//! let result = game.select_cell(CellPosition::new(1, 1));
//!
//! assert!(matches!(result, SelectionResult::Match { complete: false, .. }));
//! assert_eq!(game.score(), 1);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, BoardGenerator};
pub use game_state::{CellState, GameState, SelectionResult};
pub use rng::SimpleRng;
pub use timer::{CountdownTimer, TimerPhase, TimerToken};
