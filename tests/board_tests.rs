//! Board generation tests

use std::collections::HashSet;

use tui_memory::core::{Board, BoardError, BoardGenerator};
use tui_memory::types::CellPosition;

fn assert_paired(board: &Board) {
    let pairs = board.pair_count() as usize;
    let mut counts = vec![0u32; pairs + 1];
    for &v in board.cells() {
        assert!(
            v >= 1 && v as usize <= pairs,
            "symbol {} outside 1..={}",
            v,
            pairs
        );
        counts[v as usize] += 1;
    }
    for (symbol, &count) in counts.iter().enumerate().skip(1) {
        assert_eq!(count, 2, "symbol {} appears {} times", symbol, count);
    }
}

#[test]
fn test_every_even_grid_is_fully_paired() {
    let mut gen = BoardGenerator::new(2024);
    for width in 1..=8u16 {
        for height in 1..=8u16 {
            if (width * height) % 2 != 0 {
                continue;
            }
            let board = gen.generate(width, height).unwrap();
            assert_eq!(board.cols(), width);
            assert_eq!(board.rows(), height);
            assert_eq!(board.cell_count(), (width * height) as usize);
            assert_paired(&board);
        }
    }
}

#[test]
fn test_odd_product_fails() {
    let mut gen = BoardGenerator::new(1);
    for (w, h) in [(1, 1), (3, 3), (5, 1), (7, 9)] {
        assert_eq!(
            gen.generate(w, h),
            Err(BoardError::InvalidDimension {
                width: w,
                height: h
            })
        );
    }
}

#[test]
fn test_zero_dimension_fails() {
    let mut gen = BoardGenerator::new(1);
    assert!(matches!(
        gen.generate(0, 0),
        Err(BoardError::InvalidDimension { .. })
    ));
    assert!(gen.generate(0, 2).is_err());
    assert!(gen.generate(2, 0).is_err());
}

#[test]
fn test_error_message_names_dimensions() {
    let err = BoardGenerator::new(1).generate(3, 5).unwrap_err();
    assert!(err.to_string().contains("3x5"));
}

#[test]
fn test_repeated_generation_shuffles() {
    let mut gen = BoardGenerator::new(77);
    let boards: Vec<Board> = (0..20).map(|_| gen.generate(4, 4).unwrap()).collect();

    let distinct: HashSet<Vec<u32>> = boards.iter().map(|b| b.cells().to_vec()).collect();
    // 16!/2^8 layouts; a collision among 20 draws would point at a broken shuffle.
    assert!(distinct.len() >= 19, "only {} distinct boards", distinct.len());

    for board in &boards {
        assert_paired(board);
    }
}

#[test]
fn test_entropy_generators_differ() {
    let a = BoardGenerator::from_entropy().generate(6, 6).unwrap();
    let b = BoardGenerator::from_entropy().generate(6, 6).unwrap();
    let c = BoardGenerator::from_entropy().generate(6, 6).unwrap();
    // All three equal would need two 1-in-10^38 coincidences.
    assert!(a != b || b != c);
}

#[test]
fn test_shuffle_moves_symbols_around() {
    // Every cell should see more than one symbol across many boards.
    let mut gen = BoardGenerator::new(5);
    let mut seen: Vec<HashSet<u32>> = vec![HashSet::new(); 16];
    for _ in 0..200 {
        let board = gen.generate(4, 4).unwrap();
        for (i, &v) in board.cells().iter().enumerate() {
            seen[i].insert(v);
        }
    }
    for (i, symbols) in seen.iter().enumerate() {
        assert!(symbols.len() >= 6, "cell {} only saw {:?}", i, symbols);
    }
}

#[test]
fn test_rows_follow_height_and_width() {
    let board = BoardGenerator::new(9).generate(6, 2).unwrap();
    assert_eq!(board.rows(), 2);
    assert_eq!(board.cols(), 6);
    let positions: Vec<CellPosition> = board.positions().collect();
    assert_eq!(positions.len(), 12);
    assert_eq!(positions[0], CellPosition::new(0, 0));
    assert_eq!(positions[6], CellPosition::new(1, 0));
    assert_eq!(positions[11], CellPosition::new(1, 5));
    for pos in positions {
        assert_eq!(board.get(pos), Some(board.row(pos.row).unwrap()[pos.col as usize]));
    }
}

#[test]
fn test_every_cell_has_a_partner() {
    let board = BoardGenerator::new(11).generate(4, 4).unwrap();
    for pos in board.positions() {
        let partner = board.partner_of(pos).unwrap();
        assert_ne!(partner, pos);
        assert_eq!(board.get(partner), board.get(pos));
    }
}
