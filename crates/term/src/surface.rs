//! TermSurface: the terminal's model of what is on screen.
//!
//! The controller writes into this through the [`Surface`] trait; the
//! [`BoardView`](crate::board_view::BoardView) reads it back when drawing a
//! frame. Messages expire on their own as [`TermSurface::tick`] is fed time.

use crate::engine::Surface;
use crate::types::{CellPosition, Symbol};

/// What one grid cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellView {
    /// Last content assigned to the cell. Only drawn while `revealed`.
    pub symbol: Option<Symbol>,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Message {
    text: String,
    remaining_ms: u32,
}

#[derive(Debug, Clone, Default)]
pub struct TermSurface {
    rows: u16,
    cols: u16,
    cells: Vec<CellView>,
    message: Option<Message>,
    start_visible: bool,
    time_remaining: u32,
    score: u32,
    total_pairs: u32,
    paused: bool,
}

impl TermSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn has_grid(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn cell(&self, pos: CellPosition) -> Option<CellView> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.cells.get(pos.index(self.cols)).copied()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    pub fn start_visible(&self) -> bool {
        self.start_visible
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn score(&self) -> (u32, u32) {
        (self.score, self.total_pairs)
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Expire the current message once its display time has passed.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(msg) = self.message.as_mut() {
            msg.remaining_ms = msg.remaining_ms.saturating_sub(elapsed_ms);
            if msg.remaining_ms == 0 {
                self.message = None;
            }
        }
    }

    /// Cheap change detector for skipping redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        use std::hash::{Hash, Hasher};

        let mut h = std::collections::hash_map::DefaultHasher::new();
        (self.rows, self.cols, self.start_visible, self.paused).hash(&mut h);
        (self.time_remaining, self.score, self.total_pairs).hash(&mut h);
        self.message().hash(&mut h);
        for cell in &self.cells {
            (cell.symbol, cell.revealed).hash(&mut h);
        }
        h.finish()
    }

    fn cell_mut(&mut self, pos: CellPosition) -> Option<&mut CellView> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.cells.get_mut(pos.index(self.cols))
    }
}

impl Surface for TermSurface {
    fn create_grid(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
        self.cells.clear();
        self.cells
            .resize(rows as usize * cols as usize, CellView::default());
    }

    fn set_cell_content(&mut self, pos: CellPosition, symbol: Symbol) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.symbol = Some(symbol);
        }
    }

    fn set_cell_revealed(&mut self, pos: CellPosition, revealed: bool) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.revealed = revealed;
        }
    }

    fn remove_grid(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.cells.clear();
    }

    fn display_message(&mut self, text: &str, duration_ms: u32) {
        self.message = Some(Message {
            text: text.to_string(),
            remaining_ms: duration_ms,
        });
    }

    fn set_start_visible(&mut self, visible: bool) {
        self.start_visible = visible;
    }

    fn set_time_remaining(&mut self, secs: u32) {
        self.time_remaining = secs;
    }

    fn set_score(&mut self, score: u32, total: u32) {
        self.score = score;
        self.total_pairs = total;
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lifecycle() {
        let mut s = TermSurface::new();
        assert!(!s.has_grid());

        s.create_grid(2, 3);
        assert!(s.has_grid());
        let pos = CellPosition::new(1, 2);
        assert_eq!(s.cell(pos), Some(CellView::default()));

        s.set_cell_content(pos, 4);
        s.set_cell_revealed(pos, true);
        assert_eq!(
            s.cell(pos),
            Some(CellView {
                symbol: Some(4),
                revealed: true
            })
        );

        // Out of range writes are ignored.
        s.set_cell_revealed(CellPosition::new(2, 0), true);
        assert_eq!(s.cell(CellPosition::new(2, 0)), None);

        s.remove_grid();
        assert!(!s.has_grid());
        assert_eq!(s.cell(pos), None);
    }

    #[test]
    fn message_auto_dismisses() {
        let mut s = TermSurface::new();
        s.display_message("hello", 100);
        s.tick(60);
        assert_eq!(s.message(), Some("hello"));
        s.tick(40);
        assert_eq!(s.message(), None);
    }

    #[test]
    fn fingerprint_tracks_changes() {
        let mut s = TermSurface::new();
        s.create_grid(2, 2);
        let before = s.fingerprint();
        assert_eq!(before, s.fingerprint());

        s.set_cell_revealed(CellPosition::new(0, 0), true);
        assert_ne!(before, s.fingerprint());
    }
}
