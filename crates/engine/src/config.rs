//! Rules configuration
//!
//! Defaults come from the constants in `blockgrid_types`; `from_env` lets a
//! host override any of them without recompiling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ScoreTable;
use crate::types::{
    BOARD_SIZE, BOMB_POINTS_PER_BLOCK, BOMB_SQUARE_SIZE, LINE_CLEAR_BASE_POINTS,
    MAX_PIECES_PER_TURN, PLACEMENT_POINTS_PER_BLOCK, RAINBOW_PROBABILITY, RED_PIECES_FOR_BOMB,
};

/// Largest supported board side
pub const MAX_BOARD_SIZE: usize = 64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size must be between 1 and 64, got {0}")]
    BoardSize(usize),
    #[error("bomb square size must be odd, got {0}")]
    BombSquareSize(usize),
    #[error("rainbow probability must be within [0, 1], got {0}")]
    RainbowProbability(f64),
    #[error("at least one piece per turn is required")]
    NoPiecesPerTurn,
    #[error("red pieces needed for a bomb must be at least 1")]
    RedThreshold,
}

/// Rules configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub board_size: usize,
    pub placement_points_per_block: u32,
    pub line_clear_base_points: u32,
    pub bomb_points_per_block: u32,
    pub bomb_square_size: usize,
    pub rainbow_probability: f64,
    pub red_pieces_for_bomb: u32,
    pub max_pieces_per_turn: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            placement_points_per_block: PLACEMENT_POINTS_PER_BLOCK,
            line_clear_base_points: LINE_CLEAR_BASE_POINTS,
            bomb_points_per_block: BOMB_POINTS_PER_BLOCK,
            bomb_square_size: BOMB_SQUARE_SIZE,
            rainbow_probability: RAINBOW_PROBABILITY,
            red_pieces_for_bomb: RED_PIECES_FOR_BOMB,
            max_pieces_per_turn: MAX_PIECES_PER_TURN,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl RulesConfig {
    /// Create from environment variables, falling back to defaults
    ///
    /// - `BLOCKGRID_BOARD_SIZE`
    /// - `BLOCKGRID_PLACEMENT_POINTS`
    /// - `BLOCKGRID_LINE_CLEAR_POINTS`
    /// - `BLOCKGRID_BOMB_POINTS`
    /// - `BLOCKGRID_BOMB_SIZE`
    /// - `BLOCKGRID_RAINBOW_PROBABILITY`
    /// - `BLOCKGRID_RED_FOR_BOMB`
    /// - `BLOCKGRID_PIECES_PER_TURN`
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            board_size: env_or("BLOCKGRID_BOARD_SIZE", d.board_size),
            placement_points_per_block: env_or(
                "BLOCKGRID_PLACEMENT_POINTS",
                d.placement_points_per_block,
            ),
            line_clear_base_points: env_or("BLOCKGRID_LINE_CLEAR_POINTS", d.line_clear_base_points),
            bomb_points_per_block: env_or("BLOCKGRID_BOMB_POINTS", d.bomb_points_per_block),
            bomb_square_size: env_or("BLOCKGRID_BOMB_SIZE", d.bomb_square_size),
            rainbow_probability: env_or("BLOCKGRID_RAINBOW_PROBABILITY", d.rainbow_probability),
            red_pieces_for_bomb: env_or("BLOCKGRID_RED_FOR_BOMB", d.red_pieces_for_bomb),
            max_pieces_per_turn: env_or("BLOCKGRID_PIECES_PER_TURN", d.max_pieces_per_turn),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.bomb_square_size % 2 == 0 {
            return Err(ConfigError::BombSquareSize(self.bomb_square_size));
        }
        if !(0.0..=1.0).contains(&self.rainbow_probability) {
            return Err(ConfigError::RainbowProbability(self.rainbow_probability));
        }
        if self.max_pieces_per_turn == 0 {
            return Err(ConfigError::NoPiecesPerTurn);
        }
        if self.red_pieces_for_bomb == 0 {
            return Err(ConfigError::RedThreshold);
        }
        Ok(())
    }

    /// Point values for the scoring rules
    pub fn score_table(&self) -> ScoreTable {
        ScoreTable {
            placement_points_per_block: self.placement_points_per_block,
            line_clear_base_points: self.line_clear_base_points,
            bomb_points_per_block: self.bomb_points_per_block,
        }
    }
}
