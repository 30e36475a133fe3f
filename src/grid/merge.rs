//! Slide-and-merge.
//!
//! A move is computed by cutting the grid into groups (rows for Left/Right,
//! columns for Up/Down), merging each group as a 1-D line, and stitching the
//! groups back together. One routine therefore serves all four directions.
//!
//! ## Merge rule
//!
//! Tiles are scanned from the leading edge (index 0, or the last index for
//! Right/Down). Each non-empty tile looks ahead past empty cells to the next
//! non-empty tile; equal values merge into one tile that keeps the first
//! tile's id. A tile merges at most once per move:
//!
//! ```
//! use rust_2048::core::{Direction, IdSource, SequentialIds, Tile};
//! use rust_2048::grid::merge_row;
//!
//! let mut ids = SequentialIds::new();
//! let row: Vec<Tile> = [2, 2, 2, 2].iter().map(|&v| Tile::new(v, ids.new_id())).collect();
//!
//! let merged = merge_row(&row, Direction::Left, &mut ids);
//! let values: Vec<u32> = merged.iter().map(|t| t.value).collect();
//! assert_eq!(values, vec![4, 4, 0, 0]);
//! ```

use smallvec::SmallVec;

use super::board::Grid;
use crate::core::{Direction, IdSource, SequentialIds, Tile};

/// One row or column, in natural top-to-bottom / left-to-right order.
pub type Group = SmallVec<[Tile; 4]>;

/// Cut a grid into rows (Left/Right) or columns (Up/Down).
#[must_use]
pub fn split_groups(grid: &Grid, direction: Direction) -> Vec<Group> {
    let width = grid.width();
    let cells = grid.cells();

    if direction.is_columnar() {
        (0..width)
            .map(|x| cells.iter().skip(x).step_by(width).copied().collect())
            .collect()
    } else {
        cells.chunks(width).map(|row| row.iter().copied().collect()).collect()
    }
}

/// Reassemble groups from [`split_groups`] into row-major cells.
#[must_use]
pub fn flatten_groups(groups: &[Group], direction: Direction) -> Vec<Tile> {
    if !direction.is_columnar() {
        return groups.iter().flat_map(|g| g.iter().copied()).collect();
    }

    let height = groups.first().map_or(0, |g| g.len());
    let mut cells = Vec::with_capacity(groups.len() * height);
    for y in 0..height {
        cells.extend(groups.iter().map(|column| column[y]));
    }
    cells
}

/// Slide and merge one line toward the direction's leading edge.
///
/// Cells left over after sliding get fresh empty tiles from `ids`.
pub fn merge_row<I: IdSource + ?Sized>(tiles: &[Tile], direction: Direction, ids: &mut I) -> Group {
    let len = tiles.len();
    let invert = direction.is_inverted();
    let at = |k: usize| if invert { len - 1 - k } else { k };

    // Built in scan order, reversed at the end for inverted directions.
    let mut placed = Group::with_capacity(len);
    let mut k = 0;
    while k < len {
        let current = tiles[at(k)];
        if current.is_empty() {
            k += 1;
            continue;
        }

        // Past the end never matches. Neither does a pair whose sum would
        // not fit a tile value, so 2^31 is the largest tile.
        let merged = (k + 1..len)
            .find(|&j| !tiles[at(j)].is_empty())
            .filter(|&j| tiles[at(j)].same_value(&current))
            .and_then(|j| Some((j, current.value.checked_add(tiles[at(j)].value)?)));

        match merged {
            Some((j, value)) => {
                placed.push(Tile::new(value, current.id));
                k = j + 1;
            }
            None => {
                placed.push(current);
                k += 1;
            }
        }
    }

    while placed.len() < len {
        placed.push(Tile::empty(ids.new_id()));
    }
    if invert {
        placed.reverse();
    }
    placed
}

/// Apply a move to the whole grid. The input is left untouched.
pub fn merge<I: IdSource + ?Sized>(grid: &Grid, direction: Direction, ids: &mut I) -> Grid {
    let merged: Vec<Group> = split_groups(grid, direction)
        .iter()
        .map(|group| merge_row(group, direction, ids))
        .collect();

    Grid::from_cells(grid.width(), grid.height(), flatten_groups(&merged, direction))
}

/// Check whether a move would change the grid.
#[must_use]
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    // Ids of the probe result are thrown away.
    let mut scratch = SequentialIds::new();
    !merge(grid, direction, &mut scratch).equal(grid)
}
