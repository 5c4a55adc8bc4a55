//! Game state module - match resolution for one session
//!
//! Tracks which cells are selected or permanently revealed, the score and the
//! number of attempts. Disallowed selections (revealed cell, same cell twice,
//! a pair still pending) are silent no-ops reported as
//! [`SelectionResult::Ignored`], since they are ordinary click timing rather
//! than errors.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{CellPosition, Symbol};

/// Visible state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Hidden,
    /// Shown as part of the current turn.
    Selected,
    /// Matched; stays shown for the rest of the session.
    Revealed,
}

/// Outcome of [`GameState::select_cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionResult {
    /// Nothing changed.
    Ignored,
    /// First card of the turn is up.
    AwaitingSecond { pos: CellPosition, symbol: Symbol },
    /// Both cards match and are now permanently revealed.
    ///
    /// `complete` is set when this was the last pair on the board.
    Match {
        first: CellPosition,
        second: CellPosition,
        symbol: Symbol,
        complete: bool,
    },
    /// The cards differ. Both stay selected until
    /// [`GameState::clear_mismatch`] is called.
    Mismatch {
        first: CellPosition,
        second: CellPosition,
    },
}

/// Complete per-session game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Matched cells, indexed like the board.
    revealed: Vec<bool>,
    /// Selection slots: first then second. Never holds a second without a first.
    selection: ArrayVec<CellPosition, 2>,
    score: u32,
    attempts: u32,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        let revealed = vec![false; board.cell_count()];
        Self {
            board,
            revealed,
            selection: ArrayVec::new(),
            score: 0,
            attempts: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Matched pairs so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Resolved turns so far (matches and mismatches).
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn total_pairs(&self) -> u32 {
        self.board.pair_count()
    }

    pub fn is_complete(&self) -> bool {
        self.score == self.total_pairs()
    }

    /// Currently selected cells in pick order.
    pub fn selection(&self) -> &[CellPosition] {
        &self.selection
    }

    /// A mismatch is waiting for [`GameState::clear_mismatch`].
    pub fn is_resolution_pending(&self) -> bool {
        self.selection.is_full()
    }

    pub fn is_revealed(&self, pos: CellPosition) -> bool {
        self.board
            .index(pos)
            .map(|i| self.revealed[i])
            .unwrap_or(false)
    }

    pub fn cell_state(&self, pos: CellPosition) -> CellState {
        if self.is_revealed(pos) {
            CellState::Revealed
        } else if self.selection.contains(&pos) {
            CellState::Selected
        } else {
            CellState::Hidden
        }
    }

    /// Pick a cell for the current turn.
    pub fn select_cell(&mut self, pos: CellPosition) -> SelectionResult {
        let Some(symbol) = self.board.get(pos) else {
            return SelectionResult::Ignored;
        };
        if self.cell_state(pos) != CellState::Hidden || self.selection.is_full() {
            return SelectionResult::Ignored;
        }

        self.selection.push(pos);
        if self.selection.len() == 1 {
            return SelectionResult::AwaitingSecond { pos, symbol };
        }

        let (first, second) = (self.selection[0], pos);
        self.attempts += 1;
        if self.board.get(first) != Some(symbol) {
            return SelectionResult::Mismatch { first, second };
        }

        for p in [first, second] {
            if let Some(i) = self.board.index(p) {
                self.revealed[i] = true;
            }
        }
        self.selection.clear();
        self.score += 1;

        SelectionResult::Match {
            first,
            second,
            symbol,
            complete: self.is_complete(),
        }
    }

    /// Hide a mismatched pair again and free both selection slots.
    ///
    /// Returns the two cells that were hidden, or `None` if no mismatch was
    /// pending.
    pub fn clear_mismatch(&mut self) -> Option<[CellPosition; 2]> {
        if !self.selection.is_full() {
            return None;
        }
        let pair = [self.selection[0], self.selection[1]];
        self.selection.clear();
        Some(pair)
    }
}
