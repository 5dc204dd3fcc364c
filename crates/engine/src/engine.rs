//! Rules engine context
//!
//! [`RulesEngine`] bundles everything the rules need that outlives a single
//! call: the catalog (built once per engine), the runtime id counter, the RNG
//! and the configuration. Two engines never share any of these, so several
//! games can run side by side in one process.

use rand::Rng;

use crate::config::{ConfigError, RulesConfig};
use crate::core::library::{self, Catalog, PieceIdGenerator, RuntimePiece, SampleMode};
use crate::core::{
    apply_bomb_item, placement, resolve_lines, BombBlast, EngineError, Grid, LineClear, Placement,
    ScoreTable, SimpleRng,
};

pub struct RulesEngine<R = SimpleRng> {
    config: RulesConfig,
    scores: ScoreTable,
    catalog: Catalog,
    ids: PieceIdGenerator,
    rng: R,
}

/// Failure to set up an engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl RulesEngine<SimpleRng> {
    /// Engine with default rules and a seeded [`SimpleRng`]
    pub fn seeded(seed: u32) -> Result<Self, SetupError> {
        Self::new(RulesConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: Rng> RulesEngine<R> {
    /// Validate the config and build the catalog
    pub fn new(config: RulesConfig, rng: R) -> Result<Self, SetupError> {
        config.validate()?;
        let catalog = Catalog::build()?;
        Ok(Self {
            scores: config.score_table(),
            config,
            catalog,
            ids: PieceIdGenerator::new(),
            rng,
        })
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// The catalog, built once when the engine was created
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Empty grid of the configured size
    pub fn empty_grid(&self) -> Grid {
        Grid::new(self.config.board_size)
    }

    pub fn sample_normal_piece(&mut self) -> Result<RuntimePiece, EngineError> {
        library::sample_normal_piece(&self.catalog, &mut self.ids, &mut self.rng)
    }

    pub fn sample_normal_pieces(
        &mut self,
        count: usize,
        mode: SampleMode,
    ) -> Result<Vec<RuntimePiece>, EngineError> {
        library::sample_normal_pieces(&self.catalog, count, mode, &mut self.ids, &mut self.rng)
    }

    pub fn create_bomb_piece(&mut self) -> Result<RuntimePiece, EngineError> {
        library::create_bomb_piece(&mut self.ids)
    }

    pub fn create_rainbow_piece(&mut self) -> Result<RuntimePiece, EngineError> {
        library::create_rainbow_piece(&mut self.ids)
    }

    /// `count` pieces using the configured rainbow probability
    pub fn initialize_turn_pieces(&mut self, count: usize) -> Result<Vec<RuntimePiece>, EngineError> {
        let probability = self.config.rainbow_probability;
        self.initialize_turn_pieces_with(count, probability)
    }

    pub fn initialize_turn_pieces_with(
        &mut self,
        count: usize,
        rainbow_probability: f64,
    ) -> Result<Vec<RuntimePiece>, EngineError> {
        library::initialize_turn_pieces(
            &self.catalog,
            count,
            rainbow_probability,
            &mut self.ids,
            &mut self.rng,
        )
    }

    pub fn can_place(&self, piece: &RuntimePiece, row: i32, col: i32, grid: &Grid) -> Placement {
        placement::can_place(piece, row, col, grid)
    }

    pub fn can_place_anywhere(&self, piece: &RuntimePiece, grid: &Grid) -> bool {
        placement::can_place_anywhere(piece, grid)
    }

    pub fn is_game_over(&self, pieces: &[RuntimePiece], grid: &Grid) -> bool {
        placement::is_game_over(pieces, grid)
    }

    /// Detect, clear and score full lines with the configured points
    pub fn resolve_lines(&self, grid: &Grid) -> (Grid, LineClear) {
        resolve_lines(grid, &self.scores)
    }

    /// Detonate a bomb of the configured size
    pub fn apply_bomb(&self, grid: &Grid, row: i32, col: i32) -> BombBlast {
        apply_bomb_item(grid, row, col, self.config.bomb_square_size)
    }
}
