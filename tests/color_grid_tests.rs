//! Color grid tests - highlight cycling, removal, gravity.

use tui_puzzles::core::color_grid::{ColorCell, Rejection, GRID_ROWS};
use tui_puzzles::core::{ColorGrid, SimpleRng};
use tui_puzzles::types::{MarkColor, GRID_COLUMNS, GRID_SIZE, MARK_PALETTE};

fn idx(row: usize, col: usize) -> usize {
    row * GRID_COLUMNS + col
}

#[test]
fn test_cycle_order_matches_palette_then_clears() {
    let mut grid = ColorGrid::from_numbers([Some(5); GRID_SIZE]);

    let mut seen = Vec::new();
    loop {
        let outcome = grid.cycle(7).unwrap();
        match outcome.highlight {
            Some(color) => seen.push(color),
            None => break,
        }
    }
    assert_eq!(seen, MARK_PALETTE.to_vec());
    assert_eq!(grid.cell(7).unwrap().highlight, None);
}

#[test]
fn test_gravity_preserves_survivor_order_per_column() {
    // Column 2 holds 1,2,3,4 top to bottom; remove the middle two.
    let mut numbers = [Some(8); GRID_SIZE];
    for row in 0..GRID_ROWS {
        numbers[idx(row, 2)] = Some(row as u8 + 1);
    }
    let mut grid = ColorGrid::from_numbers(numbers);
    grid.cycle(idx(1, 2)).unwrap();
    grid.cycle(idx(2, 2)).unwrap();

    assert_eq!(grid.complete(), 2);
    assert_eq!(grid.cell_at(0, 2).unwrap(), ColorCell::default());
    assert_eq!(grid.cell_at(1, 2).unwrap().number, None);
    assert_eq!(grid.cell_at(2, 2).unwrap().number, Some(1));
    assert_eq!(grid.cell_at(3, 2).unwrap().number, Some(4));
    assert_eq!(grid.remaining(), GRID_SIZE - 2);

    // Other columns stay full.
    for col in [0, 1, 3] {
        for row in 0..GRID_ROWS {
            assert_eq!(grid.cell_at(row, col).unwrap().number, Some(8));
        }
    }
}

#[test]
fn test_columns_compact_independently() {
    let mut grid = ColorGrid::from_numbers([Some(3); GRID_SIZE]);
    // One removal in column 0, three in column 1.
    grid.cycle(idx(3, 0)).unwrap();
    for row in 0..3 {
        grid.cycle(idx(row, 1)).unwrap();
    }
    assert_eq!(grid.complete(), 4);

    // Column 0: one empty at the top, three survivors below.
    assert_eq!(grid.cell_at(0, 0).unwrap().number, None);
    for row in 1..GRID_ROWS {
        assert_eq!(grid.cell_at(row, 0).unwrap().number, Some(3));
    }
    // Column 1: the single survivor sits on the bottom row.
    for row in 0..3 {
        assert_eq!(grid.cell_at(row, 1).unwrap().number, None);
    }
    assert_eq!(grid.cell_at(3, 1).unwrap().number, Some(3));
}

#[test]
fn test_removed_cells_reject_further_clicks() {
    let mut grid = ColorGrid::from_numbers([Some(2); GRID_SIZE]);
    grid.cycle(idx(3, 0)).unwrap();
    grid.complete();

    // Gravity left the top of column 0 empty.
    assert_eq!(grid.cycle(idx(0, 0)), Err(Rejection::EmptyCell));
    // Surviving cells still cycle.
    assert!(grid.cycle(idx(3, 0)).is_ok());
}

#[test]
fn test_celebration_requires_full_board_one_color() {
    let mut grid = ColorGrid::from_numbers([Some(1); GRID_SIZE]);

    for cell in 0..GRID_SIZE - 1 {
        let outcome = grid.cycle(cell).unwrap();
        assert!(!outcome.celebration);
    }
    let outcome = grid.cycle(GRID_SIZE - 1).unwrap();
    assert!(outcome.celebration);
    assert_eq!(outcome.highlight, Some(MarkColor::Orange));

    // Cycling any cell onward breaks the condition.
    let outcome = grid.cycle(0).unwrap();
    assert!(!outcome.celebration);
}

#[test]
fn test_no_celebration_after_removal() {
    let mut grid = ColorGrid::from_numbers([Some(1); GRID_SIZE]);
    grid.cycle(0).unwrap();
    grid.complete();

    // A board with a hole can never be single-colored.
    for cell in 0..GRID_SIZE {
        let _ = grid.cycle(cell);
    }
    assert!(!grid.is_single_color());
}

#[test]
fn test_board_can_be_cleared_completely() {
    let mut grid = ColorGrid::from_numbers([Some(1); GRID_SIZE]);
    for cell in 0..GRID_SIZE {
        grid.cycle(cell).unwrap();
    }
    assert_eq!(grid.complete(), GRID_SIZE);
    assert_eq!(grid.remaining(), 0);

    let mut rng = SimpleRng::new(9);
    let fresh = ColorGrid::generate(&mut rng);
    assert_eq!(fresh.remaining(), GRID_SIZE);
}
