//! Piece library - the shape catalog and runtime piece minting
//!
//! The catalog holds every base shape in each of its four rotations, sorted by
//! shape name and then by angle. Runtime pieces are minted from it with a
//! unique id and an appearance per filled cell:
//!
//! - **normal**: one palette color stamped on every cell
//! - **bomb**: a single grey cell
//! - **rainbow**: a five-cell line colored with the rainbow sequence
//!
//! Ids come from a caller-owned [`PieceIdGenerator`] and randomness from any
//! [`rand::Rng`], so independent games never share state.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::shape::Shape;
use crate::types::{
    BlockColor, PieceType, Rotation, BOMB_COLOR, PALETTE, RAINBOW_SEQUENCE, SOLID_RED,
};

/// Shape name of the bomb piece
pub const BOMB_SHAPE_NAME: &str = "BOMB";

/// Shape name of the rainbow piece
pub const RAINBOW_SHAPE_NAME: &str = "RAINBOW";

/// Named base shapes, each expanded to four rotations in the catalog
pub const BASE_SHAPES: &[(&str, &[&[u8]])] = &[
    ("CORNER_3", &[&[1, 0], &[1, 1]]),
    ("CORNER_5", &[&[1, 0, 0], &[1, 0, 0], &[1, 1, 1]]),
    ("J_4", &[&[0, 1], &[0, 1], &[1, 1]]),
    ("LINE_2", &[&[1, 1]]),
    ("LINE_3", &[&[1, 1, 1]]),
    ("LINE_4", &[&[1, 1, 1, 1]]),
    ("LINE_5", &[&[1, 1, 1, 1, 1]]),
    ("L_4", &[&[1, 0], &[1, 0], &[1, 1]]),
    ("RECT_2X3", &[&[1, 1, 1], &[1, 1, 1]]),
    ("SQUARE_2", &[&[1, 1], &[1, 1]]),
    ("SQUARE_3", &[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]),
    ("S_4", &[&[0, 1, 1], &[1, 1, 0]]),
    ("T_4", &[&[1, 1, 1], &[0, 1, 0]]),
    ("Z_4", &[&[1, 1, 0], &[0, 1, 1]]),
];

/// One shape in one rotation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogPiece {
    /// `"{shape_name}_{degrees}"`
    pub id: String,
    pub shape_name: String,
    pub shape: Shape,
    pub rotation: Rotation,
}

impl CatalogPiece {
    fn new(shape_name: &str, base: &Shape, rotation: Rotation) -> Self {
        Self {
            id: format!("{}_{}", shape_name, rotation.degrees()),
            shape_name: shape_name.to_string(),
            shape: base.rotate(rotation),
            rotation,
        }
    }

    /// Number of clockwise quarter turns from the base shape (0..=3)
    pub fn rotation_index(&self) -> usize {
        self.rotation.index()
    }
}

/// Every base shape x four rotations, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pieces: Vec<CatalogPiece>,
}

impl Catalog {
    /// Build the standard catalog from [`BASE_SHAPES`]
    pub fn build() -> Result<Self, EngineError> {
        Self::from_shapes(BASE_SHAPES)
    }

    /// Build a catalog from arbitrary named shapes.
    ///
    /// Produces four entries per shape and sorts by name, then by angle.
    pub fn from_shapes(shapes: &[(&str, &[&[u8]])]) -> Result<Self, EngineError> {
        let mut pieces = Vec::with_capacity(shapes.len() * 4);
        for &(name, rows) in shapes {
            let base = Shape::from_rows(rows)?;
            for rotation in Rotation::ALL {
                pieces.push(CatalogPiece::new(name, &base, rotation));
            }
        }
        pieces.sort_by(|a, b| {
            a.shape_name
                .cmp(&b.shape_name)
                .then(a.rotation.cmp(&b.rotation))
        });

        tracing::debug!(shapes = shapes.len(), entries = pieces.len(), "catalog built");
        Ok(Self { pieces })
    }

    pub fn pieces(&self) -> &[CatalogPiece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Look up an entry by its `"{shape_name}_{degrees}"` id
    pub fn get(&self, id: &str) -> Option<&CatalogPiece> {
        self.pieces.iter().find(|p| p.id == id)
    }
}

/// Monotonically increasing runtime id source, owned by one game/engine
#[derive(Debug, Clone, Default)]
pub struct PieceIdGenerator {
    next: u64,
}

impl PieceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting at `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// A catalog shape minted into play
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuntimePiece {
    pub runtime_id: u64,
    pub id: String,
    pub shape_name: String,
    pub shape: Shape,
    pub rotation: Rotation,
    /// One appearance per filled cell, in row-major scan order
    pub appearance: Vec<BlockColor>,
    pub piece_type: PieceType,
    placed: bool,
}

impl RuntimePiece {
    fn from_catalog(
        entry: &CatalogPiece,
        runtime_id: u64,
        appearance: Vec<BlockColor>,
        piece_type: PieceType,
    ) -> Self {
        Self {
            runtime_id,
            id: entry.id.clone(),
            shape_name: entry.shape_name.clone(),
            shape: entry.shape.clone(),
            rotation: entry.rotation,
            appearance,
            piece_type,
            placed: false,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Flag the piece as placed; nothing else about it changes
    pub fn mark_placed(&mut self) {
        self.placed = true;
    }

    pub fn rotation_index(&self) -> usize {
        self.rotation.index()
    }

    /// Whether any cell carries the solid red appearance
    pub fn is_red(&self) -> bool {
        self.appearance.contains(&SOLID_RED)
    }
}

/// How `sample_normal_pieces` picks catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Independent uniform draw per slot
    #[default]
    Independent,
    /// Shuffle the catalog once and deal from the top, wrapping around
    Shuffled,
}

/// Pick one element uniformly, failing on an empty slice
fn pick<'a, T, R: Rng>(
    items: &'a [T],
    what: &'static str,
    rng: &mut R,
) -> Result<&'a T, EngineError> {
    items.choose(rng).ok_or(EngineError::EmptyCollection(what))
}

/// Normal piece of a chosen catalog entry in a single color
pub fn mint_piece(
    entry: &CatalogPiece,
    color: BlockColor,
    ids: &mut PieceIdGenerator,
) -> RuntimePiece {
    let appearance = vec![color; entry.shape.cell_count()];
    RuntimePiece::from_catalog(entry, ids.next_id(), appearance, PieceType::Normal)
}

fn mint_normal<R: Rng>(
    entry: &CatalogPiece,
    ids: &mut PieceIdGenerator,
    rng: &mut R,
) -> Result<RuntimePiece, EngineError> {
    let color = *pick(&PALETTE, "color palette", rng)?;
    Ok(mint_piece(entry, color, ids))
}

/// One uniformly random catalog shape with one uniformly random palette color
pub fn sample_normal_piece<R: Rng>(
    catalog: &Catalog,
    ids: &mut PieceIdGenerator,
    rng: &mut R,
) -> Result<RuntimePiece, EngineError> {
    let entry = pick(catalog.pieces(), "catalog", rng)?;
    mint_normal(entry, ids, rng)
}

/// `count` normal pieces, each with its own id and color
pub fn sample_normal_pieces<R: Rng>(
    catalog: &Catalog,
    count: usize,
    mode: SampleMode,
    ids: &mut PieceIdGenerator,
    rng: &mut R,
) -> Result<Vec<RuntimePiece>, EngineError> {
    match mode {
        SampleMode::Independent => (0..count)
            .map(|_| sample_normal_piece(catalog, ids, rng))
            .collect(),
        SampleMode::Shuffled => {
            if catalog.is_empty() {
                return Err(EngineError::EmptyCollection("catalog"));
            }
            let mut deck: Vec<&CatalogPiece> = catalog.pieces().iter().collect();
            deck.shuffle(rng);
            (0..count)
                .map(|i| mint_normal(deck[i % deck.len()], ids, rng))
                .collect()
        }
    }
}

/// Single grey cell
pub fn create_bomb_piece(ids: &mut PieceIdGenerator) -> Result<RuntimePiece, EngineError> {
    let shape = Shape::from_rows(&[[1u8]])?;
    let entry = CatalogPiece::new(BOMB_SHAPE_NAME, &shape, Rotation::North);
    Ok(RuntimePiece::from_catalog(
        &entry,
        ids.next_id(),
        vec![BOMB_COLOR],
        PieceType::Bomb,
    ))
}

/// Horizontal five-cell line in rainbow order
pub fn create_rainbow_piece(ids: &mut PieceIdGenerator) -> Result<RuntimePiece, EngineError> {
    let shape = Shape::line(RAINBOW_SEQUENCE.len())?;
    let entry = CatalogPiece::new(RAINBOW_SHAPE_NAME, &shape, Rotation::North);
    Ok(RuntimePiece::from_catalog(
        &entry,
        ids.next_id(),
        RAINBOW_SEQUENCE.to_vec(),
        PieceType::Rainbow,
    ))
}

/// A turn's worth of pieces.
///
/// Each slot is a rainbow piece with probability `rainbow_probability`,
/// otherwise a normal piece. All start unplaced.
pub fn initialize_turn_pieces<R: Rng>(
    catalog: &Catalog,
    count: usize,
    rainbow_probability: f64,
    ids: &mut PieceIdGenerator,
    rng: &mut R,
) -> Result<Vec<RuntimePiece>, EngineError> {
    if !(0.0..=1.0).contains(&rainbow_probability) {
        return Err(EngineError::InvalidProbability(rainbow_probability));
    }
    (0..count)
        .map(|_| {
            if rng.gen_bool(rainbow_probability) {
                create_rainbow_piece(ids)
            } else {
                sample_normal_piece(catalog, ids, rng)
            }
        })
        .collect()
}

/// True when every piece has been placed (vacuously true when empty)
pub fn all_placed(pieces: &[RuntimePiece]) -> bool {
    pieces.iter().all(RuntimePiece::is_placed)
}
