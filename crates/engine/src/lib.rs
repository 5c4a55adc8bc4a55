//! Session engine - drives the core rules from outside events.
//!
//! The engine sits between a front end and the pure [`core`] logic:
//!
//! - [`config`]: session settings loaded from a JSON file and environment variables
//! - [`surface`]: the [`Surface`] trait a front end implements to display the game
//! - [`controller`]: [`GameController`], which deals boards, runs the countdown,
//!   resolves picks and sequences the end of a session
//!
//! # Example
//!
//! ```
//! use tui_memory_engine::{GameConfig, GameController, Phase, Surface};
//! use tui_memory_engine::core::BoardGenerator;
//! use tui_memory_engine::types::{CellPosition, InputEvent};
//!
//! struct Headless;
//!
//! impl Surface for Headless {
//!     fn create_grid(&mut self, _rows: u16, _cols: u16) {}
//!     fn set_cell_content(&mut self, _pos: CellPosition, _symbol: u32) {}
//!     fn set_cell_revealed(&mut self, _pos: CellPosition, _revealed: bool) {}
//!     fn remove_grid(&mut self) {}
//!     fn display_message(&mut self, _text: &str, _duration_ms: u32) {}
//!     fn set_start_visible(&mut self, _visible: bool) {}
//!     fn set_time_remaining(&mut self, _secs: u32) {}
//!     fn set_score(&mut self, _score: u32, _total: u32) {}
//!     fn set_paused(&mut self, _paused: bool) {}
//! }
//!
//! let mut controller = GameController::new(GameConfig::default(), BoardGenerator::new(7), Headless);
//! controller.handle_input(InputEvent::Start).unwrap();
//! assert_eq!(controller.phase(), Phase::Playing);
//!
//! controller.advance(1_000);
//! assert_eq!(controller.timer().remaining_secs(), 59);
//! ```

pub mod config;
pub mod controller;
pub mod surface;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use config::{ConfigError, GameConfig};
pub use controller::{EndReason, GameController, Phase, SessionSummary};
pub use surface::Surface;
