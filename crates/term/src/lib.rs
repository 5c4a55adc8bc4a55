//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal as a diff.
//!
//! - [`surface`]: [`TermSurface`], the front end's implementation of the engine's
//!   [`Surface`](tui_memory_engine::Surface) trait
//! - [`board_view`]: pure drawing of a `TermSurface` plus mouse hit-testing
//! - [`renderer`]: terminal session setup and framebuffer flushing
//! - [`render_throttle`]: redraw only when something visible changed

pub mod board_view;
pub mod fb;
pub mod render_throttle;
pub mod renderer;
pub mod surface;

pub use tui_memory_engine as engine;
pub use tui_memory_types as types;

pub use board_view::{BoardView, Layout, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::{CellView, TermSurface};
