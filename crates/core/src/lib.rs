//! Core rules module - pure, deterministic, and testable
//!
//! This crate contains the block-placement puzzle rules: shapes and their
//! rotations, the piece catalog, placement legality, line clears, bombs,
//! scoring and the item inventory. It has no dependencies on rendering, input
//! or storage, and no hidden global state:
//!
//! - **Deterministic**: the same seed produces identical piece streams
//! - **Copy-on-write**: every grid operation returns a new [`Grid`]
//! - **Caller-owned state**: catalog, id counter and RNG are passed in
//!
//! # Module Structure
//!
//! - [`shape`]: validated 0/1 matrices and clockwise rotation
//! - [`library`]: the shape catalog and runtime piece minting
//! - [`grid`]: the N x N play field
//! - [`placement`]: footprints, legality and feasibility search
//! - [`clearing`]: full row/column detection and removal
//! - [`bomb`]: square-neighbourhood clearing
//! - [`scoring`]: placement, line clear and bomb points
//! - [`inventory`]: item counts
//! - [`rng`]: seeded generator for reproducible games
//!
//! # Example
//!
//! ```
//! use blockgrid_core::{can_place, resolve_lines, Catalog, Grid, PieceIdGenerator, ScoreTable, SimpleRng};
//! use blockgrid_core::library::sample_normal_piece;
//!
//! let catalog = Catalog::build().unwrap();
//! let mut ids = PieceIdGenerator::new();
//! let mut rng = SimpleRng::new(12345);
//!
//! let piece = sample_normal_piece(&catalog, &mut ids, &mut rng).unwrap();
//! let grid = Grid::new(10);
//!
//! let placement = can_place(&piece, 0, 0, &grid);
//! assert!(placement.is_valid());
//!
//! let grid = grid.with_filled(placement.cells(), &piece.appearance);
//! let (grid, clear) = resolve_lines(&grid, &ScoreTable::default());
//! assert!(clear.is_empty());
//! assert_eq!(grid.filled_count(), piece.shape.cell_count());
//! ```

pub mod bomb;
pub mod clearing;
pub mod error;
pub mod grid;
pub mod inventory;
pub mod library;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use blockgrid_types as types;

// Re-export commonly used types for convenience
pub use bomb::{apply_bomb_item, cells_in_square, clear_square, BombBlast};
pub use clearing::{clear_lines, filled_columns, filled_rows, resolve_lines, LineClear};
pub use error::{EngineError, ShapeError};
pub use grid::Grid;
pub use inventory::{Inventory, Removal};
pub use library::{
    all_placed, mint_piece, Catalog, CatalogPiece, PieceIdGenerator, RuntimePiece, SampleMode,
};
pub use placement::{
    affected_cells, can_place, can_place_anywhere, is_game_over, Footprint, Placement,
};
pub use rng::SimpleRng;
pub use scoring::{bomb_destruction_score, clear_score, placement_score, ScoreTable};
pub use shape::Shape;
