//! Game sessions: one board plus the rules and randomness that drive it.
//!
//! - `GameMode`: rules trait with `Standard` and `Compress` implementations
//! - `Session`: owns the current board, commits moves, tracks the score

pub mod mode;
pub mod score;
pub mod game;

pub use mode::{Compress, GameMode, Mode, Standard};
pub use score::ScoreTracker;
pub use game::Session;
