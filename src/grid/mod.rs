//! Grid engine: the board value and the pure operations over it.
//!
//! Nothing here holds state between calls. Every operation takes the grid
//! by reference and returns a new grid, drawing randomness and tile ids
//! from sources the caller passes in.

pub mod board;
pub mod merge;
pub mod insert;

pub use board::{Grid, DEFAULT_SIZE};
pub use merge::{can_move, flatten_groups, merge, merge_row, split_groups, Group};
pub use insert::{free_cell_indexes, insert_random, weighted_choice};
