//! Bomb tests - square neighbourhoods and detonation

use blockgrid::core::{apply_bomb_item, bomb_destruction_score, cells_in_square, clear_square, Grid};
use blockgrid::types::{BlockColor, CellPos, BOARD_SIZE, BOMB_SQUARE_SIZE};

fn full_grid() -> Grid {
    Grid::from_pattern(&["##########"; 10], BlockColor::Purple)
}

#[test]
fn test_corner_square_is_clipped() {
    let cells = cells_in_square(0, 0, BOMB_SQUARE_SIZE, BOARD_SIZE, None);
    assert!(cells.contains(&CellPos::new(0, 0)));
    assert!(cells.contains(&CellPos::new(0, 1)));
    assert!(cells.contains(&CellPos::new(1, 0)));
    assert!(cells.iter().all(|p| p.row >= 0 && p.col >= 0));
    assert_eq!(cells.len(), 9);
}

#[test]
fn test_far_corner_is_clipped() {
    let cells = cells_in_square(9, 9, 5, 10, None);
    assert_eq!(cells.len(), 9);
    assert!(cells.iter().all(|p| p.in_bounds(10)));
}

#[test]
fn test_only_filled_cells() {
    let grid = Grid::new(10).with_filled(
        &[CellPos::new(4, 4), CellPos::new(5, 6), CellPos::new(9, 9)],
        &[BlockColor::Red],
    );
    assert_eq!(
        cells_in_square(5, 5, 3, 10, Some(&grid)),
        vec![CellPos::new(4, 4), CellPos::new(5, 6)]
    );
}

#[test]
fn test_clear_square_only_touches_square() {
    let cleared = clear_square(&full_grid(), 5, 5, 3);
    assert_eq!(cleared.filled_count(), 100 - 9);
    assert!(!cleared.is_filled(CellPos::new(4, 4)));
    assert!(!cleared.is_filled(CellPos::new(6, 6)));
    assert!(cleared.is_filled(CellPos::new(3, 5)));
    assert!(cleared.is_filled(CellPos::new(7, 5)));
}

#[test]
fn test_apply_bomb_reports_destroyed_before_clear() {
    let grid = Grid::new(10).with_filled(
        &[CellPos::new(0, 0), CellPos::new(2, 2), CellPos::new(8, 8)],
        &[BlockColor::Blue],
    );
    let blast = apply_bomb_item(&grid, 1, 1, 5);
    assert_eq!(blast.destroyed, vec![CellPos::new(0, 0), CellPos::new(2, 2)]);
    assert_eq!(blast.grid.filled_count(), 1);
    assert!(blast.grid.is_filled(CellPos::new(8, 8)));
    assert_eq!(bomb_destruction_score(blast.destroyed.len()), 20);

    // input grid is untouched
    assert_eq!(grid.filled_count(), 3);
}

#[test]
fn test_bomb_on_empty_area_destroys_nothing() {
    let blast = apply_bomb_item(&Grid::new(10), 5, 5, 5);
    assert!(blast.destroyed.is_empty());
    assert!(blast.grid.is_empty());
}
