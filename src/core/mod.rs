//! Core types: tiles, directions, randomness, configuration, errors.
//!
//! Everything here is independent of the grid engine and of any UI. Hosts
//! inject randomness and identifiers through the traits in [`rng`].

pub mod tile;
pub mod direction;
pub mod rng;
pub mod config;
pub mod error;

pub use tile::{Tile, TileId};
pub use direction::Direction;
pub use rng::{
    GameRng, IdSource, RandomIds, RandomSource, ScriptedRandom, SequentialIds,
};
pub use config::{CompressConfig, InsertConfig, ModeKind, ProbabilityTable, SessionConfig};
pub use error::{EngineError, EngineResult};
