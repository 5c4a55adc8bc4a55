//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and focus events into [`crate::types::InputEvent`] and keeps
//! the keyboard cursor used to pick cells without a mouse.

pub mod handler;
pub mod map;

pub use tui_memory_types as types;

pub use handler::{Cursor, InputHandler};
pub use map::{handle_key_event, should_quit, Direction, KeyAction};
