//! Bomb clearing - square neighbourhood removal
//!
//! A bomb of size `s` clears the square spanning `s / 2` cells on each side of
//! its center, clipped to the board.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::CellPos;

/// Board cells in the square around (center_row, center_col), row-major.
///
/// Off-board coordinates are dropped, so a far-off center yields nothing. With
/// `filled_in = Some(grid)` only cells filled on that grid are kept.
pub fn cells_in_square(
    center_row: i32,
    center_col: i32,
    size: usize,
    board_size: usize,
    filled_in: Option<&Grid>,
) -> Vec<CellPos> {
    let half = (size / 2) as i64;
    let (center_row, center_col) = (center_row as i64, center_col as i64);
    let board = board_size as i64;
    let mut cells = Vec::new();
    for row in (center_row - half).max(0)..=(center_row + half).min(board - 1) {
        for col in (center_col - half).max(0)..=(center_col + half).min(board - 1) {
            let pos = CellPos::new(row as i32, col as i32);
            if let Some(grid) = filled_in {
                if !grid.is_filled(pos) {
                    continue;
                }
            }
            cells.push(pos);
        }
    }
    cells
}

/// New grid with the whole square around the center emptied
pub fn clear_square(grid: &Grid, center_row: i32, center_col: i32, size: usize) -> Grid {
    let half = (size / 2) as i64;
    grid.cleared_where(|cell| {
        (cell.row() as i64 - center_row as i64).abs() <= half
            && (cell.col() as i64 - center_col as i64).abs() <= half
    })
}

/// Result of detonating a bomb item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombBlast {
    /// Cells that were filled before the blast, row-major
    pub destroyed: Vec<CellPos>,
    pub grid: Grid,
}

/// Detonate at the center: report the filled cells hit and the cleared grid
pub fn apply_bomb_item(grid: &Grid, center_row: i32, center_col: i32, size: usize) -> BombBlast {
    let destroyed = cells_in_square(center_row, center_col, size, grid.size(), Some(grid));
    let cleared = clear_square(grid, center_row, center_col, size);
    tracing::debug!(center_row, center_col, destroyed = destroyed.len(), "bomb detonated");
    BombBlast {
        destroyed,
        grid: cleared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockColor;

    #[test]
    fn test_square_is_clipped_to_board() {
        let cells = cells_in_square(0, 0, 3, 10, None);
        assert_eq!(
            cells,
            vec![
                CellPos::new(0, 0),
                CellPos::new(0, 1),
                CellPos::new(1, 0),
                CellPos::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_full_square_in_the_middle() {
        assert_eq!(cells_in_square(5, 5, 5, 10, None).len(), 25);
        assert_eq!(cells_in_square(5, 5, 1, 10, None), vec![CellPos::new(5, 5)]);
    }

    #[test]
    fn test_extreme_centers_hit_nothing() {
        let grid = Grid::from_pattern(&["###", "###", "###"], BlockColor::Red);
        for (row, col) in [(i32::MAX, 0), (i32::MIN, 0), (0, i32::MAX), (i32::MIN, i32::MIN)] {
            assert!(cells_in_square(row, col, 5, 10, None).is_empty());
            assert_eq!(clear_square(&grid, row, col, 5), grid);
            assert!(apply_bomb_item(&grid, row, col, 5).destroyed.is_empty());
        }
    }

    #[test]
    fn test_clear_square_matches_cells_in_square() {
        let grid = Grid::from_pattern(&["####", "####", "####", "####"], BlockColor::Blue);
        let cleared = clear_square(&grid, 3, 3, 3);
        assert_eq!(cleared.to_pattern(), vec!["####", "####", "##..", "##.."]);
    }
}
