//! Shape module - validated 0/1 piece matrices and quarter-turn rotation
//!
//! A [`Shape`] is a non-empty rectangular matrix of filled/empty cells, stored
//! row-major in a flat vector like the board. Shapes are immutable: rotating
//! one always produces a new shape.

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::types::{Rotation, MAX_SHAPE_DIM};

/// Rectangular filled/empty matrix.
///
/// Only construction enforces the 5x5 cap; `rotate_cw` works on any size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Shape {
    height: usize,
    width: usize,
    /// Row-major (row * width + col)
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Rejects empty input, jagged rows, values other than 0/1, shapes with no
    /// filled cell and shapes larger than 5x5.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(ShapeError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(ShapeError::InvalidValue { row, col, value }),
                }
            }
        }

        if height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return Err(ShapeError::TooLarge { height, width });
        }
        if !cells.iter().any(|&c| c) {
            return Err(ShapeError::NoFilledCells);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Horizontal line of `len` filled cells
    pub fn line(len: usize) -> Result<Self, ShapeError> {
        Self::from_rows(&[vec![1u8; len]])
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at (row, col) is filled; out of range is empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Offsets `(row, col)` of the filled cells in row-major scan order
    pub fn filled_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| (i / self.width, i % self.width))
    }

    /// The matrix as rows of 0/1
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&c| c as u8).collect())
            .collect()
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    ///
    /// An `h x w` shape becomes `w x h`.
    pub fn rotate_cw(&self) -> Self {
        let (height, width) = (self.width, self.height);
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..height {
            for col in 0..width {
                // transposed[row][col] = self[col][row], then row reversed
                cells.push(self.cells[(width - 1 - col) * self.width + row]);
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    /// Apply `rotation.index()` clockwise quarter turns
    pub fn rotate(&self, rotation: Rotation) -> Self {
        let mut shape = self.clone();
        for _ in 0..rotation.index() {
            shape = shape.rotate_cw();
        }
        shape
    }

    /// Rotate by a clockwise angle given in degrees (any multiple of 90)
    pub fn rotated_by_degrees(&self, degrees: u32) -> Result<Self, ShapeError> {
        let rotation =
            Rotation::from_degrees(degrees).ok_or(ShapeError::UnsupportedAngle(degrees))?;
        Ok(self.rotate(rotation))
    }
}

impl TryFrom<Vec<Vec<u8>>> for Shape {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Shape> for Vec<Vec<u8>> {
    fn from(shape: Shape) -> Self {
        shape.to_rows()
    }
}
