//! Grid module - the square play field
//!
//! The grid is an N x N array of [`Cell`]s in a flat row-major vector
//! (`row * size + col`). Cell positions are fixed when the grid is built; only
//! fill state changes, and every mutating operation returns a new grid rather
//! than touching the input.

use serde::{Deserialize, Serialize};

use crate::types::{BlockColor, Cell, CellPos};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|i| Cell::empty(i / size, i % size))
            .collect();
        Self { size, cells }
    }

    /// Calculate flat index from a (possibly off-board) position
    #[inline(always)]
    fn index(&self, pos: CellPos) -> Option<usize> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        Some(pos.row as usize * self.size + pos.col as usize)
    }

    /// Rows (and columns) on the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }

    /// Cell at a signed position, `None` if out of bounds
    pub fn at(&self, pos: CellPos) -> Option<&Cell> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    /// Within bounds and empty
    pub fn is_free(&self, pos: CellPos) -> bool {
        matches!(self.at(pos), Some(cell) if !cell.filled())
    }

    /// Within bounds and filled
    pub fn is_filled(&self, pos: CellPos) -> bool {
        matches!(self.at(pos), Some(cell) if cell.filled())
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.size {
            return false;
        }
        let start = row * self.size;
        self.cells[start..start + self.size]
            .iter()
            .all(|cell| cell.filled())
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.size {
            return false;
        }
        (0..self.size).all(|row| self.cells[row * self.size + col].filled())
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.filled()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// New grid with `positions` filled.
    ///
    /// `colors[i]` is stamped on `positions[i]`; when `colors` is shorter the
    /// last color repeats. Off-board positions are skipped, as is the whole
    /// call when `colors` is empty.
    pub fn with_filled(&self, positions: &[CellPos], colors: &[BlockColor]) -> Grid {
        let mut next = self.clone();
        let Some(&last) = colors.last() else {
            return next;
        };
        for (i, &pos) in positions.iter().enumerate() {
            if let Some(idx) = next.index(pos) {
                let color = colors.get(i).copied().unwrap_or(last);
                next.cells[idx] = next.cells[idx].with_color(color);
            }
        }
        next
    }

    /// New grid with every cell accepted by `clear` reset to empty
    pub fn cleared_where(&self, clear: impl Fn(&Cell) -> bool) -> Grid {
        let cells = self
            .cells
            .iter()
            .map(|&cell| if clear(&cell) { cell.cleared() } else { cell })
            .collect();
        Grid {
            size: self.size,
            cells,
        }
    }

    /// Build from rows of 0/1 for tests and fixtures; filled cells get `color`
    pub fn from_pattern(rows: &[&str], color: BlockColor) -> Grid {
        let size = rows.len();
        let mut grid = Grid::new(size);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(size).enumerate() {
                if ch != '.' && ch != '0' {
                    let idx = row * size + col;
                    grid.cells[idx] = grid.cells[idx].with_color(color);
                }
            }
        }
        grid
    }

    /// Render as one line per row, `#` filled and `.` empty
    pub fn to_pattern(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.filled() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::BOARD_SIZE)
    }
}
