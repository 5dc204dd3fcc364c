//! Block-placement puzzle rules (workspace facade crate).
//!
//! Exposes `blockgrid::{core,engine,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use blockgrid_core as core;
pub use blockgrid_engine as engine;
pub use blockgrid_types as types;
