//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the rules engine and the
//! application layer around it. Everything here is plain data: no randomness,
//! no grid logic, no I/O.
//!
//! # Board
//!
//! - **Size**: 10x10 square grid (indexed 0-9 on both axes)
//! - **Coordinates**: `(row, col)`, row 0 at the top, col 0 at the left
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 10 | Rows and columns on the board |
//! | `PLACEMENT_POINTS_PER_BLOCK` | 10 | Points per filled cell of a placed piece |
//! | `LINE_CLEAR_BASE_POINTS` | 1000 | Points per cleared row or column, before multipliers |
//! | `BOMB_POINTS_PER_BLOCK` | 10 | Points per block destroyed by a bomb |
//! | `BOMB_SQUARE_SIZE` | 5 | Side of the square a bomb clears |
//! | `RAINBOW_PROBABILITY` | 0.1 | Chance a turn slot yields a rainbow piece |
//! | `RED_PIECES_FOR_BOMB` | 3 | Red placements needed to earn one bomb item |
//! | `MAX_PIECES_PER_TURN` | 3 | Pieces offered per turn |
//!
//! # Examples
//!
//! ```
//! use blockgrid_types::{BlockColor, Rotation, BOARD_SIZE};
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_degrees(450), Some(Rotation::East));
//!
//! assert_eq!(BlockColor::from_str("block-red"), Some(BlockColor::Red));
//! assert_eq!(BOARD_SIZE, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Board side length in cells (10x10)
pub const BOARD_SIZE: usize = 10;

/// Points awarded per filled cell when a piece is placed
pub const PLACEMENT_POINTS_PER_BLOCK: u32 = 10;

/// Points per cleared line before the multi-line multiplier
pub const LINE_CLEAR_BASE_POINTS: u32 = 1000;

/// Points awarded per block destroyed by a bomb
pub const BOMB_POINTS_PER_BLOCK: u32 = 10;

/// Side length of the square cleared by a bomb (odd)
pub const BOMB_SQUARE_SIZE: usize = 5;

/// Probability that a turn slot is filled with a rainbow piece
pub const RAINBOW_PROBABILITY: f64 = 0.1;

/// Number of red pieces that must be placed to earn one bomb item
pub const RED_PIECES_FOR_BOMB: u32 = 3;

/// Number of pieces offered per turn
pub const MAX_PIECES_PER_TURN: usize = 3;

/// Maximum height or width of any piece shape
pub const MAX_SHAPE_DIM: usize = 5;

/// Maximum number of filled cells in any piece shape
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// Appearance identifier stamped on each filled cell.
///
/// The string form (`as_str`) is the sprite/SVG reference the renderer looks up.
/// Normal pieces use one entry of [`PALETTE`], bombs use [`BlockColor::Grey`] and
/// rainbow pieces use [`RAINBOW_SEQUENCE`] in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Grey,
    RainbowRed,
    RainbowOrange,
    RainbowYellow,
    RainbowGreen,
    RainbowBlue,
}

/// Colors a normal piece can be minted with
pub const PALETTE: [BlockColor; 6] = [
    BlockColor::Red,
    BlockColor::Orange,
    BlockColor::Yellow,
    BlockColor::Green,
    BlockColor::Blue,
    BlockColor::Purple,
];

/// Appearance of the five cells of a rainbow piece, left to right
pub const RAINBOW_SEQUENCE: [BlockColor; 5] = [
    BlockColor::RainbowRed,
    BlockColor::RainbowOrange,
    BlockColor::RainbowYellow,
    BlockColor::RainbowGreen,
    BlockColor::RainbowBlue,
];

/// Appearance of the single bomb cell
pub const BOMB_COLOR: BlockColor = BlockColor::Grey;

/// The reserved "solid red" identifier that counts towards bomb rewards
pub const SOLID_RED: BlockColor = BlockColor::Red;

impl BlockColor {
    /// Parse from the sprite reference string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockgrid_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_str("block-grey"), Some(BlockColor::Grey));
    /// assert_eq!(BlockColor::from_str("rainbow-3"), Some(BlockColor::RainbowYellow));
    /// assert_eq!(BlockColor::from_str("magenta"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "block-red" => Some(BlockColor::Red),
            "block-orange" => Some(BlockColor::Orange),
            "block-yellow" => Some(BlockColor::Yellow),
            "block-green" => Some(BlockColor::Green),
            "block-blue" => Some(BlockColor::Blue),
            "block-purple" => Some(BlockColor::Purple),
            "block-grey" => Some(BlockColor::Grey),
            "rainbow-1" => Some(BlockColor::RainbowRed),
            "rainbow-2" => Some(BlockColor::RainbowOrange),
            "rainbow-3" => Some(BlockColor::RainbowYellow),
            "rainbow-4" => Some(BlockColor::RainbowGreen),
            "rainbow-5" => Some(BlockColor::RainbowBlue),
            _ => None,
        }
    }

    /// Sprite reference string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Red => "block-red",
            BlockColor::Orange => "block-orange",
            BlockColor::Yellow => "block-yellow",
            BlockColor::Green => "block-green",
            BlockColor::Blue => "block-blue",
            BlockColor::Purple => "block-purple",
            BlockColor::Grey => "block-grey",
            BlockColor::RainbowRed => "rainbow-1",
            BlockColor::RainbowOrange => "rainbow-2",
            BlockColor::RainbowYellow => "rainbow-3",
            BlockColor::RainbowGreen => "rainbow-4",
            BlockColor::RainbowBlue => "rainbow-5",
        }
    }
}

/// Kind of a runtime piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    /// Catalog shape with a single palette color
    Normal,
    /// Single grey cell
    Bomb,
    /// Five-cell line with the rainbow sequence
    Rainbow,
}

impl PieceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceType::Normal => "normal",
            PieceType::Bomb => "bomb",
            PieceType::Rainbow => "rainbow",
        }
    }
}

/// Quarter-turn orientation of a shape
///
/// - **North**: as defined (0°)
/// - **East**: rotated 90° clockwise
/// - **South**: rotated 180°
/// - **West**: rotated 270° clockwise
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All four rotations in ascending angle order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockgrid_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Clockwise angle in degrees (0, 90, 180 or 270)
    pub fn degrees(&self) -> u32 {
        self.index() as u32 * 90
    }

    /// Number of clockwise quarter turns (0..=3)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Convert a clockwise angle to a rotation
    ///
    /// Any multiple of 90 is accepted and normalised modulo 360.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockgrid_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_degrees(0), Some(Rotation::North));
    /// assert_eq!(Rotation::from_degrees(270), Some(Rotation::West));
    /// assert_eq!(Rotation::from_degrees(360), Some(Rotation::North));
    /// assert_eq!(Rotation::from_degrees(45), None);
    /// ```
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        Some(Self::ALL[((degrees / 90) % 4) as usize])
    }
}

/// Absolute board coordinate of a piece cell.
///
/// Signed so that a piece dragged partly off the board still has a well-defined
/// footprint; in-bounds checks happen against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: i32,
    pub col: i32,
}

impl CellPos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether the position lies on a `board_size` x `board_size` board
    pub fn in_bounds(&self, board_size: usize) -> bool {
        let size = board_size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }
}

/// A cell on the game grid
///
/// Position is fixed at construction. A cell is filled exactly when it carries
/// a color, so clearing always resets both together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
    color: Option<BlockColor>,
}

impl Cell {
    /// Create an empty cell at the given position
    pub const fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            color: None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn filled(&self) -> bool {
        self.color.is_some()
    }

    pub fn color(&self) -> Option<BlockColor> {
        self.color
    }

    /// Same position, filled with `color`
    pub fn with_color(self, color: BlockColor) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Same position, empty
    pub fn cleared(self) -> Self {
        Self {
            color: None,
            ..self
        }
    }
}

/// Inventory item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Bomb,
}

impl ItemKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bomb" => Some(ItemKind::Bomb),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Bomb => "bomb",
        }
    }
}
