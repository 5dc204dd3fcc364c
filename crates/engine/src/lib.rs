//! Engine module - the rules behind a caller-owned context
//!
//! [`RulesEngine`] holds the catalog, runtime id counter, RNG and
//! [`RulesConfig`] for one game, replacing hidden process-wide state.
//! [`GameSession`] drives a full game on top of it: placement, line clears,
//! red-piece bomb rewards, bomb items, refills and game over.
//!
//! # Example
//!
//! ```
//! use blockgrid_engine::{GameSession, RulesEngine};
//!
//! let engine = RulesEngine::seeded(42).unwrap();
//! let mut session = GameSession::new(engine).unwrap();
//!
//! let outcome = session.place(0, 0, 0).unwrap();
//! assert!(outcome.placement_points > 0);
//! assert_eq!(session.score(), outcome.points());
//! ```

pub mod config;
pub mod engine;
pub mod session;

pub use blockgrid_core as core;
pub use blockgrid_types as types;

pub use config::{ConfigError, RulesConfig, MAX_BOARD_SIZE};
pub use engine::{RulesEngine, SetupError};
pub use session::{BombOutcome, GameSession, PlaceError, PlaceOutcome};
