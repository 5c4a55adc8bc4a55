//! Rendering collaborator interface.
//!
//! The controller never draws anything itself. It tells a [`Surface`] what
//! changed and the front end decides how that looks. Cells are addressed
//! directly by [`CellPosition`]; there are no separate handles.

use crate::types::{CellPosition, Symbol};

pub trait Surface {
    /// Build an empty grid of hidden cells.
    fn create_grid(&mut self, rows: u16, cols: u16);

    fn set_cell_content(&mut self, pos: CellPosition, symbol: Symbol);

    /// Show (`true`) or hide (`false`) a cell's content.
    fn set_cell_revealed(&mut self, pos: CellPosition, revealed: bool);

    fn remove_grid(&mut self);

    /// Show a message that disappears on its own after `duration_ms`.
    fn display_message(&mut self, text: &str, duration_ms: u32);

    fn set_start_visible(&mut self, visible: bool);

    fn set_time_remaining(&mut self, secs: u32);

    fn set_score(&mut self, score: u32, total: u32);

    fn set_paused(&mut self, paused: bool);
}
