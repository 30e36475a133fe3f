//! Random tile insertion.

use super::board::Grid;
use crate::core::{EngineError, EngineResult, InsertConfig, ProbabilityTable, RandomSource};

/// Draw a value from a probability table.
///
/// Walks entries in descending weight order, accumulating normalized
/// weights, and returns the first entry whose cumulative mass exceeds one
/// uniform sample. If rounding keeps the sample above every threshold, the
/// last (lowest-weight) entry is returned.
///
/// ```
/// use rust_2048::core::{ProbabilityTable, ScriptedRandom};
/// use rust_2048::grid::weighted_choice;
///
/// let table = ProbabilityTable::new([(2, 1.0), (4, 1.0)]).unwrap();
/// assert_eq!(weighted_choice(&table, &mut ScriptedRandom::constant(0.25)), 2);
/// assert_eq!(weighted_choice(&table, &mut ScriptedRandom::constant(0.5)), 4);
/// ```
pub fn weighted_choice<R: RandomSource + ?Sized>(table: &ProbabilityTable, rng: &mut R) -> u32 {
    let total = table.total_weight();
    let sample = rng.uniform();

    let mut cumulative = 0.0;
    for &(value, weight) in table.leading() {
        cumulative += weight / total;
        if sample < cumulative {
            return value;
        }
    }
    table.fallback()
}

/// Indexes holding zero, ascending.
#[must_use]
pub fn free_cell_indexes(values: &[u32]) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == 0)
        .map(|(i, _)| i)
        .collect()
}

/// Insert `config.times` random tiles into a copy of `grid`.
///
/// Each insertion picks a free cell uniformly, then a value from the table.
/// Free cells are re-scanned before every insertion, so tiles placed by the
/// same call never collide.
///
/// # Errors
///
/// [`EngineError::NoFreeCell`] if the grid fills up before all tiles are
/// placed. The input grid is never modified.
pub fn insert_random<R: RandomSource + ?Sized>(
    grid: &Grid,
    config: &InsertConfig,
    rng: &mut R,
) -> EngineResult<Grid> {
    let mut next = grid.clone();

    for inserted in 0..config.times {
        let free = next.free_cells();
        if free.is_empty() {
            return Err(EngineError::NoFreeCell {
                requested: config.times,
                inserted,
            });
        }

        let index = free[rng.pick_index(free.len())];
        let value = weighted_choice(&config.table, rng);
        next.set_value(index, value);
    }

    Ok(next)
}
