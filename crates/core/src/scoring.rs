//! Scoring module - placement, line clear and bomb points
//!
//! Line clears use a base of 1000 points per line and a multiplier:
//! - rows and columns cleared together: x2, whatever the line count
//! - rows only or columns only: 1 line x1, 2 lines x1.5, 3 lines x2, 4+ lines x4
//!
//! Multipliers are kept in halves so the x1.5 case stays in integer math; the
//! result is floored.

use serde::{Deserialize, Serialize};

use crate::shape::Shape;
use crate::types::{BOMB_POINTS_PER_BLOCK, LINE_CLEAR_BASE_POINTS, PLACEMENT_POINTS_PER_BLOCK};

/// Point values used by every scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub placement_points_per_block: u32,
    pub line_clear_base_points: u32,
    pub bomb_points_per_block: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            placement_points_per_block: PLACEMENT_POINTS_PER_BLOCK,
            line_clear_base_points: LINE_CLEAR_BASE_POINTS,
            bomb_points_per_block: BOMB_POINTS_PER_BLOCK,
        }
    }
}

/// Line clear multiplier, in halves (x1.5 == 3)
fn clear_multiplier_halves(row_count: usize, column_count: usize) -> u64 {
    if row_count > 0 && column_count > 0 {
        return 4;
    }
    match row_count + column_count {
        0 => 0,
        1 => 2,
        2 => 3,
        3 => 4,
        _ => 8,
    }
}

impl ScoreTable {
    /// Points for placing `shape`: per-block points x filled cells
    pub fn placement_score(&self, shape: &Shape) -> u32 {
        self.placement_points_per_block
            .saturating_mul(shape.cell_count() as u32)
    }

    /// Points for `destroyed` blocks removed by a bomb
    pub fn bomb_destruction_score(&self, destroyed: usize) -> u32 {
        self.bomb_points_per_block.saturating_mul(destroyed as u32)
    }

    /// Points for clearing `row_count` rows and `column_count` columns at once
    pub fn clear_score(&self, row_count: usize, column_count: usize) -> u32 {
        let lines = (row_count + column_count) as u64;
        let halves = clear_multiplier_halves(row_count, column_count);
        let points = self.line_clear_base_points as u64 * lines * halves / 2;
        points.min(u32::MAX as u64) as u32
    }
}

/// Placement points with the standard table
pub fn placement_score(shape: &Shape) -> u32 {
    ScoreTable::default().placement_score(shape)
}

/// Bomb points with the standard table
pub fn bomb_destruction_score(destroyed: usize) -> u32 {
    ScoreTable::default().bomb_destruction_score(destroyed)
}

/// Line clear points with the standard table
pub fn clear_score(row_count: usize, column_count: usize) -> u32 {
    ScoreTable::default().clear_score(row_count, column_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_axis_multipliers() {
        assert_eq!(clear_score(0, 0), 0);
        assert_eq!(clear_score(1, 0), 1000);
        assert_eq!(clear_score(0, 2), 3000);
        assert_eq!(clear_score(3, 0), 6000);
        assert_eq!(clear_score(4, 0), 16000);
        assert_eq!(clear_score(0, 6), 24000);
    }

    #[test]
    fn test_joint_clear_is_always_double() {
        assert_eq!(clear_score(1, 1), 4000);
        assert_eq!(clear_score(2, 2), 8000);
        assert_eq!(clear_score(3, 1), 8000);
        // joint 4-line clear scores below a 4-row clear
        assert!(clear_score(2, 2) < clear_score(4, 0));
    }

    #[test]
    fn test_odd_base_floors() {
        let table = ScoreTable {
            line_clear_base_points: 333,
            ..ScoreTable::default()
        };
        // 333 * 2 * 1.5 = 999
        assert_eq!(table.clear_score(2, 0), 999);
        let table = ScoreTable {
            line_clear_base_points: 1,
            ..ScoreTable::default()
        };
        // 1 * 1 * 1 = 1, 1 * 2 * 1.5 = 3
        assert_eq!(table.clear_score(1, 0), 1);
        assert_eq!(table.clear_score(0, 2), 3);
    }

    #[test]
    fn test_placement_and_bomb_points() {
        let square = Shape::from_rows(&[[1u8, 1], [1, 1]]).unwrap();
        assert_eq!(placement_score(&square), 40);
        assert_eq!(bomb_destruction_score(0), 0);
        assert_eq!(bomb_destruction_score(7), 70);
    }
}
