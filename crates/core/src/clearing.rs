//! Line clearing - full row/column detection and removal
//!
//! Unlike falling-block games nothing shifts: cleared cells simply become
//! empty in place. A cell on both a cleared row and a cleared column is
//! cleared once.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::scoring::ScoreTable;

/// Indices of completely filled rows, ascending
pub fn filled_rows(grid: &Grid) -> Vec<usize> {
    (0..grid.size()).filter(|&row| grid.is_row_full(row)).collect()
}

/// Indices of completely filled columns, ascending
pub fn filled_columns(grid: &Grid) -> Vec<usize> {
    (0..grid.size())
        .filter(|&col| grid.is_column_full(col))
        .collect()
}

/// New grid with every cell in `rows` or `columns` emptied
pub fn clear_lines(grid: &Grid, rows: &[usize], columns: &[usize]) -> Grid {
    grid.cleared_where(|cell| rows.contains(&cell.row()) || columns.contains(&cell.col()))
}

/// What a line clear removed and what it was worth
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineClear {
    pub rows: Vec<usize>,
    pub columns: Vec<usize>,
    pub score: u32,
}

impl LineClear {
    pub fn lines(&self) -> usize {
        self.rows.len() + self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines() == 0
    }
}

/// Detect, clear and score every full line in one step
pub fn resolve_lines(grid: &Grid, table: &ScoreTable) -> (Grid, LineClear) {
    let rows = filled_rows(grid);
    let columns = filled_columns(grid);
    if rows.is_empty() && columns.is_empty() {
        return (grid.clone(), LineClear::default());
    }

    let cleared = clear_lines(grid, &rows, &columns);
    let score = table.clear_score(rows.len(), columns.len());
    tracing::debug!(?rows, ?columns, score, "lines cleared");
    (
        cleared,
        LineClear {
            rows,
            columns,
            score,
        },
    )
}
