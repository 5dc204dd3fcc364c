//! Clearing tests - full lines, removal and line scoring

use blockgrid::core::{
    clear_lines, clear_score, filled_columns, filled_rows, resolve_lines, Grid, ScoreTable,
};
use blockgrid::types::{BlockColor, CellPos};

fn grid(rows: &[&str]) -> Grid {
    Grid::from_pattern(rows, BlockColor::Yellow)
}

#[test]
fn test_clear_score_table() {
    assert_eq!(clear_score(0, 0), 0);
    assert_eq!(clear_score(1, 0), 1000);
    assert_eq!(clear_score(0, 2), 3000);
    assert_eq!(clear_score(1, 1), 4000);
    assert_eq!(clear_score(2, 2), 8000);
    assert_eq!(clear_score(3, 0), 6000);
    assert_eq!(clear_score(4, 0), 16000);
    assert_eq!(clear_score(0, 5), 20000);
}

#[test]
fn test_joint_clear_doubles_regardless_of_count() {
    // 2 rows + 2 columns pays less than 4 rows alone
    assert!(clear_score(2, 2) < clear_score(4, 0));
    assert_eq!(clear_score(3, 1), 8000);
}

#[test]
fn test_detects_rows_and_columns() {
    let g = grid(&[
        "#####",
        "#....",
        "#####",
        "#....",
        "#....",
    ]);
    assert_eq!(filled_rows(&g), vec![0, 2]);
    assert_eq!(filled_columns(&g), vec![0]);
}

#[test]
fn test_empty_grid_has_no_lines() {
    let g = Grid::new(10);
    assert!(filled_rows(&g).is_empty());
    assert!(filled_columns(&g).is_empty());
}

#[test]
fn test_clear_lines_leaves_other_cells_untouched() {
    let g = grid(&[
        "####",
        "#.#.",
        "..#.",
        "#.#.",
    ]);
    let cleared = clear_lines(&g, &[0], &[2]);
    assert_eq!(cleared.to_pattern(), vec!["....", "#...", "....", "#..."]);

    for cell in cleared.cells() {
        if cell.row() != 0 && cell.col() != 2 {
            let original = g.get(cell.row(), cell.col()).unwrap();
            assert_eq!(cell, original);
        } else {
            assert!(!cell.filled());
            assert_eq!(cell.color(), None);
        }
    }
}

#[test]
fn test_clear_lines_returns_new_grid() {
    let g = grid(&["##", "##"]);
    let cleared = clear_lines(&g, &[0, 1], &[]);
    assert_eq!(g.filled_count(), 4);
    assert!(cleared.is_empty());
}

#[test]
fn test_resolve_after_commit() {
    let g = grid(&[
        "###.",
        "....",
        "....",
        "....",
    ]);
    let g = g.with_filled(&[CellPos::new(0, 3)], &[BlockColor::Red]);
    let (after, clear) = resolve_lines(&g, &ScoreTable::default());
    assert_eq!(clear.rows, vec![0]);
    assert!(clear.columns.is_empty());
    assert_eq!(clear.score, 1000);
    assert_eq!(clear.lines(), 1);
    assert!(after.is_empty());
}

#[test]
fn test_resolve_with_custom_points() {
    let table = ScoreTable {
        line_clear_base_points: 100,
        ..ScoreTable::default()
    };
    let (_, clear) = resolve_lines(&grid(&["##", "#."]), &table);
    assert_eq!((clear.rows.clone(), clear.columns.clone()), (vec![0], vec![0]));
    assert_eq!(clear.score, 400);
}
