//! Board module - the paired symbol grid and its generator
//!
//! A board is `height` rows by `width` columns of symbol values. Every value in
//! `1..=cells/2` appears exactly twice. Uses a flat row-major vector; a board is
//! built once per session and never mutated afterwards.

use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::{CellPosition, Symbol};

/// Board construction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Zero-sized dimension or an odd number of cells.
    #[error("invalid board dimensions {width}x{height}: need non-zero sides and an even cell count")]
    InvalidDimension { width: u16, height: u16 },
    /// Rows passed to [`Board::from_rows`] do not form a paired grid.
    #[error("cells do not form a paired grid")]
    Unpaired,
}

/// The game board - `rows` x `cols` symbols using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat array of symbols, row-major order (row * cols + col)
    cells: Vec<Symbol>,
}

impl Board {
    /// Build a board from explicit rows, checking the pairing invariant.
    ///
    /// Mostly useful for tests and replays where the layout must be known.
    pub fn from_rows(rows: &[Vec<Symbol>]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let (Ok(h), Ok(w)) = (u16::try_from(height), u16::try_from(width)) else {
            return Err(BoardError::Unpaired);
        };
        check_dimensions(w, h)?;
        if rows.iter().any(|r| r.len() != width) {
            return Err(BoardError::Unpaired);
        }

        let cells: Vec<Symbol> = rows.iter().flatten().copied().collect();
        let pairs = cells.len() / 2;
        let mut counts = vec![0u8; pairs + 1];
        for &v in &cells {
            let slot = usize::try_from(v).ok().filter(|&s| s >= 1 && s <= pairs);
            match slot {
                Some(s) => counts[s] += 1,
                None => return Err(BoardError::Unpaired),
            }
        }
        if counts[1..].iter().any(|&c| c != 2) {
            return Err(BoardError::Unpaired);
        }

        Ok(Self {
            rows: h,
            cols: w,
            cells,
        })
    }

    /// Number of rows (the configured height).
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns (the configured width).
    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of pairs on the board.
    pub fn pair_count(&self) -> u32 {
        (self.cells.len() / 2) as u32
    }

    /// Check whether `pos` lies on the board.
    pub fn contains(&self, pos: CellPosition) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[inline(always)]
    pub(crate) fn index(&self, pos: CellPosition) -> Option<usize> {
        self.contains(pos).then(|| pos.index(self.cols))
    }

    /// Symbol at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: CellPosition) -> Option<Symbol> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// One row of the board.
    pub fn row(&self, row: u16) -> Option<&[Symbol]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// All symbols in row-major order.
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Iterate every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> + '_ {
        (0..self.cells.len()).map(move |i| CellPosition::from_index(i, self.cols))
    }

    /// Find the other cell holding the same symbol as `pos`.
    pub fn partner_of(&self, pos: CellPosition) -> Option<CellPosition> {
        let idx = self.index(pos)?;
        let symbol = self.cells[idx];
        self.cells
            .iter()
            .enumerate()
            .find(|&(i, &v)| i != idx && v == symbol)
            .map(|(i, _)| CellPosition::from_index(i, self.cols))
    }
}

fn check_dimensions(width: u16, height: u16) -> Result<(), BoardError> {
    let cells = width as u32 * height as u32;
    if width == 0 || height == 0 || cells % 2 != 0 {
        return Err(BoardError::InvalidDimension { width, height });
    }
    Ok(())
}

/// Produces freshly shuffled boards.
///
/// Each call to [`BoardGenerator::generate`] advances the same RNG, so
/// consecutive boards are independent permutations while a fixed seed still
/// replays the exact same sequence of boards.
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    rng: SimpleRng,
}

impl BoardGenerator {
    /// Generator with a fixed seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: SimpleRng::from_entropy(),
        }
    }

    /// Generator for an optional configured seed.
    pub fn with_seed(seed: Option<u32>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Generate a `height` x `width` board of shuffled pairs.
    ///
    /// Fails without producing anything when either side is zero or the cell
    /// count is odd.
    pub fn generate(&mut self, width: u16, height: u16) -> Result<Board, BoardError> {
        check_dimensions(width, height)?;

        let pairs = (width as u32 * height as u32) / 2;
        let mut cells: Vec<Symbol> = (1..=pairs).chain(1..=pairs).collect();
        self.rng.shuffle(&mut cells);

        Ok(Board {
            rows: height,
            cols: width,
            cells,
        })
    }
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_counts(board: &Board) -> Vec<u32> {
        let mut counts = vec![0u32; board.pair_count() as usize + 1];
        for &v in board.cells() {
            counts[v as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_generate_dimensions() {
        let board = BoardGenerator::new(1).generate(6, 3).unwrap();
        assert_eq!(board.cols(), 6);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cell_count(), 18);
        assert_eq!(board.pair_count(), 9);
        for r in 0..3 {
            assert_eq!(board.row(r).unwrap().len(), 6);
        }
        assert!(board.row(3).is_none());
    }

    #[test]
    fn test_generate_pairs_every_symbol() {
        let board = BoardGenerator::new(42).generate(4, 4).unwrap();
        let counts = symbol_counts(&board);
        assert_eq!(counts[0], 0);
        assert!(counts[1..].iter().all(|&c| c == 2));
    }

    #[test]
    fn test_generate_rejects_bad_dimensions() {
        let mut gen = BoardGenerator::new(1);
        assert_eq!(
            gen.generate(3, 3),
            Err(BoardError::InvalidDimension {
                width: 3,
                height: 3
            })
        );
        assert!(gen.generate(0, 4).is_err());
        assert!(gen.generate(4, 0).is_err());
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = BoardGenerator::new(7).generate(4, 4).unwrap();
        let b = BoardGenerator::new(7).generate(4, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = BoardGenerator::new(1).generate(2, 2).unwrap();
        assert!(board.get(CellPosition::new(1, 1)).is_some());
        assert_eq!(board.get(CellPosition::new(2, 0)), None);
        assert_eq!(board.get(CellPosition::new(0, 2)), None);
    }

    #[test]
    fn test_row_matches_flat_cells() {
        let board = BoardGenerator::new(5).generate(4, 2).unwrap();
        assert_eq!(board.row(1).unwrap(), &board.cells()[4..8]);
        assert_eq!(
            board.get(CellPosition::new(1, 3)),
            Some(board.cells()[7])
        );
    }

    #[test]
    fn test_partner_of() {
        let board = Board::from_rows(&[vec![1, 2], vec![2, 1]]).unwrap();
        assert_eq!(
            board.partner_of(CellPosition::new(0, 0)),
            Some(CellPosition::new(1, 1))
        );
        assert_eq!(
            board.partner_of(CellPosition::new(0, 1)),
            Some(CellPosition::new(1, 0))
        );
        assert_eq!(board.partner_of(CellPosition::new(5, 5)), None);
    }

    #[test]
    fn test_from_rows_validates_pairs() {
        assert!(Board::from_rows(&[vec![1, 1], vec![2, 2]]).is_ok());
        assert_eq!(
            Board::from_rows(&[vec![1, 1], vec![1, 2]]),
            Err(BoardError::Unpaired)
        );
        assert_eq!(
            Board::from_rows(&[vec![1, 3], vec![3, 1]]),
            Err(BoardError::Unpaired)
        );
        assert_eq!(
            Board::from_rows(&[vec![1, 1], vec![2]]),
            Err(BoardError::Unpaired)
        );
        assert!(matches!(
            Board::from_rows(&[vec![1, 1, 2]]),
            Err(BoardError::InvalidDimension { .. })
        ));
        assert!(Board::from_rows(&[]).is_err());
    }
}
