//! # rust-2048
//!
//! Rules engine for 2048-style sliding-tile puzzles.
//!
//! ## Design Principles
//!
//! 1. **Pure grid engine**: Moves, insertions and lookups take a grid and
//!    return a new one. Nothing mutates a caller's board.
//!
//! 2. **Injected randomness**: No global RNG. Every random draw and every
//!    tile id comes from a source the host passes in, so games replay
//!    exactly under a seed and tests can script the dice.
//!
//! 3. **Rules as data + trait**: Board size and tile odds live in config;
//!    variant behaviour lives behind the `GameMode` trait.
//!
//! ## Modules
//!
//! - `core`: Tiles, directions, RNG and id sources, configuration, errors
//! - `grid`: Grid value, slide-and-merge, random insertion
//! - `session`: Stateful sessions and the `Standard` / `Compress` modes
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, Session, SessionConfig};
//!
//! let mut session = Session::from_config(&SessionConfig::default())?;
//! while session.is_playable() && session.moves() < 20 {
//!     for direction in Direction::ALL {
//!         session.play(direction)?;
//!     }
//! }
//! println!("{}score {}", session.grid(), session.score());
//! # Ok::<(), rust_2048::EngineError>(())
//! ```

pub mod core;
pub mod grid;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CompressConfig, Direction, EngineError, EngineResult, GameRng, IdSource,
    InsertConfig, ModeKind, ProbabilityTable, RandomIds, RandomSource, ScriptedRandom,
    SequentialIds, SessionConfig, Tile, TileId,
};

pub use crate::grid::{
    can_move, flatten_groups, free_cell_indexes, insert_random, merge, merge_row, split_groups,
    weighted_choice, Grid, Group,
};

pub use crate::session::{Compress, GameMode, Mode, ScoreTracker, Session, Standard};
