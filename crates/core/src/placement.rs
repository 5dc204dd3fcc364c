//! Placement module - footprint, legality and feasibility search
//!
//! A piece dropped at an origin occupies `origin + offset` for every filled
//! offset of its shape. The footprint is listed in row-major scan order of the
//! shape, which preview rendering relies on.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::library::RuntimePiece;
use crate::shape::Shape;
use crate::types::{CellPos, MAX_SHAPE_CELLS};

/// Absolute cells of one piece footprint (a shape never exceeds 5x5)
pub type Footprint = ArrayVec<CellPos, MAX_SHAPE_CELLS>;

/// Outcome of a legality check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Every cell is on the board and empty
    Valid { cells: Footprint },
    /// Out of bounds or overlapping; no footprint is reported
    Rejected,
}

impl Placement {
    pub fn is_valid(&self) -> bool {
        matches!(self, Placement::Valid { .. })
    }

    /// Cells of a valid placement; empty when rejected
    pub fn cells(&self) -> &[CellPos] {
        match self {
            Placement::Valid { cells } => cells,
            Placement::Rejected => &[],
        }
    }
}

/// Origin plus offset; coordinates past the `i32` range clamp, which keeps
/// them off every board
fn offset_cell(origin_row: i32, origin_col: i32, r: usize, c: usize) -> CellPos {
    CellPos::new(
        origin_row.saturating_add(r as i32),
        origin_col.saturating_add(c as i32),
    )
}

/// Cells the shape would occupy with its top-left at (origin_row, origin_col)
pub fn shape_footprint(shape: &Shape, origin_row: i32, origin_col: i32) -> Footprint {
    shape
        .filled_offsets()
        .map(|(r, c)| offset_cell(origin_row, origin_col, r, c))
        .collect()
}

/// Cells the piece would occupy with its top-left at (origin_row, origin_col)
pub fn affected_cells(piece: &RuntimePiece, origin_row: i32, origin_col: i32) -> Footprint {
    shape_footprint(&piece.shape, origin_row, origin_col)
}

/// Whether every filled cell of `shape` at the origin satisfies `is_free`
pub fn fits(
    shape: &Shape,
    origin_row: i32,
    origin_col: i32,
    is_free: impl Fn(CellPos) -> bool,
) -> bool {
    shape
        .filled_offsets()
        .all(|(r, c)| is_free(offset_cell(origin_row, origin_col, r, c)))
}

/// Check a drop of `shape` at the origin against bounds and occupancy
pub fn can_place_shape(shape: &Shape, origin_row: i32, origin_col: i32, grid: &Grid) -> Placement {
    let cells = shape_footprint(shape, origin_row, origin_col);
    if cells.iter().all(|&pos| grid.is_free(pos)) {
        Placement::Valid { cells }
    } else {
        Placement::Rejected
    }
}

/// Check a drop of `piece` at the origin against bounds and occupancy
pub fn can_place(piece: &RuntimePiece, origin_row: i32, origin_col: i32, grid: &Grid) -> Placement {
    can_place_shape(&piece.shape, origin_row, origin_col, grid)
}

/// First legal origin in row-major order, if any
pub fn first_fit(shape: &Shape, grid: &Grid) -> Option<(i32, i32)> {
    let size = grid.size() as i32;
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .find(|&(row, col)| fits(shape, row, col, |pos| grid.is_free(pos)))
}

/// Exhaustive search for any legal origin on the board
pub fn can_place_anywhere(piece: &RuntimePiece, grid: &Grid) -> bool {
    first_fit(&piece.shape, grid).is_some()
}

/// Every legal origin, row-major
pub fn legal_origins(piece: &RuntimePiece, grid: &Grid) -> Vec<(i32, i32)> {
    let size = grid.size() as i32;
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter(|&(row, col)| fits(&piece.shape, row, col, |pos| grid.is_free(pos)))
        .collect()
}

/// True when no unplaced piece has a legal origin.
///
/// Placed pieces are ignored; an active set with nothing left to place is
/// vacuously over, so callers refill before asking.
pub fn is_game_over(pieces: &[RuntimePiece], grid: &Grid) -> bool {
    pieces
        .iter()
        .filter(|piece| !piece.is_placed())
        .all(|piece| !can_place_anywhere(piece, grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockColor;

    fn shape(rows: &[&[u8]]) -> Shape {
        Shape::from_rows(rows).unwrap()
    }

    #[test]
    fn test_footprint_order_is_row_major() {
        let cells = shape_footprint(&shape(&[&[0, 1], &[1, 1]]), 2, 5);
        assert_eq!(
            cells.as_slice(),
            &[CellPos::new(2, 6), CellPos::new(3, 5), CellPos::new(3, 6)]
        );
    }

    #[test]
    fn test_negative_origin_rejected() {
        let grid = Grid::new(10);
        let s = shape(&[&[1]]);
        assert_eq!(can_place_shape(&s, -1, 0, &grid), Placement::Rejected);
        assert!(can_place_shape(&s, 0, 0, &grid).is_valid());
    }

    #[test]
    fn test_overlap_rejected_with_empty_cells() {
        let grid = Grid::new(4).with_filled(&[CellPos::new(1, 1)], &[BlockColor::Red]);
        let placement = can_place_shape(&shape(&[&[1, 1], &[1, 1]]), 0, 0, &grid);
        assert_eq!(placement, Placement::Rejected);
        assert!(placement.cells().is_empty());
    }

    #[test]
    fn test_extreme_origins_are_rejected() {
        let grid = Grid::new(10);
        let line = Shape::line(5).unwrap();
        for (row, col) in [(0, i32::MAX), (i32::MAX, 0), (i32::MIN, 0), (0, i32::MIN)] {
            assert_eq!(can_place_shape(&line, row, col, &grid), Placement::Rejected);
            assert!(!fits(&line, row, col, |pos| grid.is_free(pos)));
        }
        let cells = shape_footprint(&line, 0, i32::MAX - 1);
        assert_eq!(cells.len(), 5);
        assert!(cells.iter().all(|pos| !pos.in_bounds(10)));
    }

    #[test]
    fn test_first_fit_skips_blocked_origins() {
        let grid = Grid::from_pattern(&["##.", "...", "..."], BlockColor::Blue);
        assert_eq!(first_fit(&shape(&[&[1]]), &grid), Some((0, 2)));
        assert_eq!(first_fit(&shape(&[&[1, 1]]), &grid), Some((1, 0)));
    }
}
