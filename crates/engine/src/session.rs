//! Game session - one game driven through the rules
//!
//! The session owns the mutable side of a game (grid, active pieces, score,
//! inventory, red-piece counter) and applies the rules in the order a turn
//! needs them. Every grid change still goes through the copy-on-write core.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{
    all_placed, EngineError, Grid, Inventory, LineClear, Placement, Removal, RuntimePiece,
    SimpleRng,
};
use crate::engine::RulesEngine;
use crate::types::{CellPos, ItemKind};

#[derive(Debug, Clone, PartialEq)]
pub enum PlaceError {
    GameOver,
    NoSuchPiece,
    AlreadyPlaced,
    Blocked,
    NoBombAvailable,
    Engine(EngineError),
}

impl PlaceError {
    pub fn code(&self) -> &'static str {
        match self {
            PlaceError::GameOver => "game_over",
            PlaceError::NoSuchPiece | PlaceError::AlreadyPlaced | PlaceError::Blocked => {
                "invalid_place"
            }
            PlaceError::NoBombAvailable => "item_unavailable",
            PlaceError::Engine(_) => "engine_error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PlaceError::GameOver => "game is over",
            PlaceError::NoSuchPiece => "piece index is out of range",
            PlaceError::AlreadyPlaced => "piece has already been placed",
            PlaceError::Blocked => "piece does not fit at the target cell",
            PlaceError::NoBombAvailable => "no bomb item in the inventory",
            PlaceError::Engine(_) => "piece generation failed",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::Engine(err) => write!(f, "{}: {}", self.message(), err),
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for PlaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaceError::Engine(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EngineError> for PlaceError {
    fn from(err: EngineError) -> Self {
        PlaceError::Engine(err)
    }
}

/// What a successful placement did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOutcome {
    pub cells: Vec<CellPos>,
    pub placement_points: u32,
    pub lines: LineClear,
    /// Bomb items awarded by this placement (0 or 1)
    pub bombs_awarded: u32,
    /// A fresh set of pieces was dealt
    pub refilled: bool,
    pub game_over: bool,
}

impl PlaceOutcome {
    pub fn points(&self) -> u32 {
        self.placement_points.saturating_add(self.lines.score)
    }
}

/// What a detonated bomb item did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombOutcome {
    pub destroyed: Vec<CellPos>,
    pub points: u32,
    pub game_over: bool,
}

pub struct GameSession<R = SimpleRng> {
    engine: RulesEngine<R>,
    grid: Grid,
    pieces: Vec<RuntimePiece>,
    score: u32,
    inventory: Inventory,
    red_pieces_placed: u32,
    game_over: bool,
}

impl<R: Rng> GameSession<R> {
    /// Empty board and a first turn of pieces
    pub fn new(mut engine: RulesEngine<R>) -> Result<Self, EngineError> {
        let grid = engine.empty_grid();
        let pieces = engine.initialize_turn_pieces(engine.config().max_pieces_per_turn)?;
        let game_over = engine.is_game_over(&pieces, &grid);
        Ok(Self {
            engine,
            grid,
            pieces,
            score: 0,
            inventory: Inventory::new(),
            red_pieces_placed: 0,
            game_over,
        })
    }

    pub fn engine(&self) -> &RulesEngine<R> {
        &self.engine
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active set, placed pieces included until the next refill
    pub fn pieces(&self) -> &[RuntimePiece] {
        &self.pieces
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn red_pieces_placed(&self) -> u32 {
        self.red_pieces_placed
    }

    /// Drop the piece at `piece_index` with its top-left at (row, col).
    ///
    /// A rejected placement leaves the session untouched.
    pub fn place(
        &mut self,
        piece_index: usize,
        row: i32,
        col: i32,
    ) -> Result<PlaceOutcome, PlaceError> {
        if self.game_over {
            return Err(PlaceError::GameOver);
        }
        let piece = self.pieces.get(piece_index).ok_or(PlaceError::NoSuchPiece)?;
        if piece.is_placed() {
            return Err(PlaceError::AlreadyPlaced);
        }
        let cells = match self.engine.can_place(piece, row, col, &self.grid) {
            Placement::Valid { cells } => cells,
            Placement::Rejected => {
                tracing::trace!(piece_index, row, col, "placement rejected");
                return Err(PlaceError::Blocked);
            }
        };

        let placement_points = self.engine.scores().placement_score(&piece.shape);
        let is_red = piece.is_red();
        let committed = self.grid.with_filled(&cells, &piece.appearance);
        let (grid, lines) = self.engine.resolve_lines(&committed);

        self.pieces[piece_index].mark_placed();
        self.grid = grid;
        self.score = self
            .score
            .saturating_add(placement_points.saturating_add(lines.score));

        let mut bombs_awarded = 0;
        if is_red {
            self.red_pieces_placed += 1;
            if self.red_pieces_placed % self.engine.config().red_pieces_for_bomb == 0 {
                self.inventory = self.inventory.add_item(ItemKind::Bomb.as_str(), 1);
                bombs_awarded = 1;
            }
        }

        let refilled = all_placed(&self.pieces);
        if refilled {
            let count = self.engine.config().max_pieces_per_turn;
            self.pieces = self.engine.initialize_turn_pieces(count)?;
            tracing::debug!(count, "pieces refilled");
        }

        self.update_game_over();
        Ok(PlaceOutcome {
            cells: cells.to_vec(),
            placement_points,
            lines,
            bombs_awarded,
            refilled,
            game_over: self.game_over,
        })
    }

    /// Spend one bomb item centered on (row, col).
    ///
    /// Allowed after game over: clearing space may reopen the game.
    pub fn use_bomb(&mut self, row: i32, col: i32) -> Result<BombOutcome, PlaceError> {
        let inventory = match self.inventory.remove_item(ItemKind::Bomb.as_str()) {
            Removal::Removed(inventory) => inventory,
            Removal::Unavailable => return Err(PlaceError::NoBombAvailable),
        };
        let blast = self.engine.apply_bomb(&self.grid, row, col);
        let points = self.engine.scores().bomb_destruction_score(blast.destroyed.len());

        self.inventory = inventory;
        self.grid = blast.grid;
        self.score = self.score.saturating_add(points);
        self.update_game_over();
        Ok(BombOutcome {
            destroyed: blast.destroyed,
            points,
            game_over: self.game_over,
        })
    }

    fn update_game_over(&mut self) {
        let over = self.engine.is_game_over(&self.pieces, &self.grid);
        if over && !self.game_over {
            tracing::debug!(score = self.score, "game over");
        }
        self.game_over = over;
    }
}
