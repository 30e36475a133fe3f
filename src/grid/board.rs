//! The grid value type.
//!
//! Cells are stored row-major: index `i` is column `i % width`, row
//! `i / width`. Width and height never change after creation.
//!
//! Engine operations never mutate a caller's grid; they return a new one.
//! Equality compares tile values in index order and ignores tile ids.

use crate::core::{IdSource, Tile};

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 4;

/// A rectangular board of tiles.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Tile>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an empty `width x height` grid with a fresh id per cell.
    ///
    /// # Panics
    ///
    /// If either dimension is zero.
    #[must_use]
    pub fn new<I: IdSource + ?Sized>(width: usize, height: usize, ids: &mut I) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be non-zero");

        let cells = (0..width * height).map(|_| Tile::empty(ids.new_id())).collect();
        Self { cells, width, height }
    }

    /// Create an empty 4x4 grid.
    #[must_use]
    pub fn standard<I: IdSource + ?Sized>(ids: &mut I) -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE, ids)
    }

    /// Create a grid from row-major values.
    ///
    /// ```
    /// use rust_2048::core::SequentialIds;
    /// use rust_2048::grid::Grid;
    ///
    /// let mut ids = SequentialIds::new();
    /// let grid = Grid::from_values(2, 2, &[2, 0, 0, 4], &mut ids);
    ///
    /// assert_eq!(grid.get(1, 1).map(|t| t.value), Some(4));
    /// assert_eq!(grid.score(), 6);
    /// ```
    ///
    /// # Panics
    ///
    /// If `values.len() != width * height`, either dimension is zero, or a
    /// value is neither 0 nor a power of two.
    #[must_use]
    pub fn from_values<I: IdSource + ?Sized>(
        width: usize,
        height: usize,
        values: &[u32],
        ids: &mut I,
    ) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be non-zero");
        assert_eq!(values.len(), width * height, "value count must match grid size");
        if let Some(bad) = values.iter().find(|&&v| v != 0 && !v.is_power_of_two()) {
            panic!("tile value {bad} is neither 0 nor a power of two");
        }

        let cells = values.iter().map(|&v| Tile::new(v, ids.new_id())).collect();
        Self { cells, width, height }
    }

    /// Assemble a grid from already-built tiles.
    ///
    /// # Panics
    ///
    /// If `cells.len() != width * height`.
    #[must_use]
    pub fn from_cells(width: usize, height: usize, cells: Vec<Tile>) -> Self {
        assert_eq!(cells.len(), width * height, "cell count must match grid size");
        Self { cells, width, height }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; grids have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tiles in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Tile values in row-major order.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.cells.iter().map(|t| t.value).collect()
    }

    /// Row-major index of column `x`, row `y`.
    #[must_use]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// `(column, row)` of a row-major index.
    #[must_use]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Tile at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(self.index(x, y))
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.cells.iter().map(|t| u64::from(t.value)).sum()
    }

    /// Largest tile value on the board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().map(|t| t.value).max().unwrap_or(0)
    }

    /// Indexes of empty cells, ascending.
    #[must_use]
    pub fn free_cells(&self) -> Vec<usize> {
        super::free_cell_indexes(&self.values())
    }

    /// Check if any cell is empty.
    #[must_use]
    pub fn has_free_cell(&self) -> bool {
        self.cells.iter().any(Tile::is_empty)
    }

    /// Value equality, cell by cell. Ids are ignored.
    #[must_use]
    pub fn equal(&self, other: &Grid) -> bool {
        self.cells.len() == other.cells.len()
            && self.cells.iter().zip(&other.cells).all(|(a, b)| a.same_value(b))
    }

    pub(crate) fn set_value(&mut self, index: usize, value: u32) {
        self.cells[index].value = value;
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Grid {}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: Vec<String> = row.iter().map(|t| format!("{:>5}", t.value)).collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequentialIds;

    #[test]
    fn test_new_grid_is_empty_with_unique_ids() {
        let mut ids = SequentialIds::new();
        let grid = Grid::new(3, 2, &mut ids);

        assert_eq!(grid.len(), 6);
        assert!(grid.cells().iter().all(Tile::is_empty));

        let mut seen: Vec<_> = grid.cells().iter().map(|t| t.id).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_width_panics() {
        let _ = Grid::new(0, 4, &mut SequentialIds::new());
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn test_non_power_of_two_value_panics() {
        let _ = Grid::from_values(2, 1, &[2, 3], &mut SequentialIds::new());
    }

    #[test]
    fn test_accepts_largest_tile() {
        let mut ids = SequentialIds::new();
        let grid = Grid::from_values(2, 1, &[1 << 31, 1 << 31], &mut ids);
        assert_eq!(grid.score(), 1 << 32);
        assert_eq!(grid.max_tile(), 1 << 31);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut ids = SequentialIds::new();
        let grid = Grid::from_values(2, 1, &[2, 0], &mut ids);
        let mut copy = grid.clone();
        copy.set_value(1, 4);

        assert_eq!(grid.values(), vec![2, 0]);
        assert_eq!(copy.values(), vec![2, 4]);
        assert_eq!(copy.cells()[0].id, grid.cells()[0].id);
    }

    #[test]
    fn test_equality_ignores_ids() {
        let a = Grid::from_values(2, 2, &[2, 4, 0, 8], &mut SequentialIds::new());
        let mut other_ids = SequentialIds::new();
        other_ids.new_id();
        let b = Grid::from_values(2, 2, &[2, 4, 0, 8], &mut other_ids);
        let c = Grid::from_values(2, 2, &[2, 4, 8, 0], &mut SequentialIds::new());

        assert_ne!(a.cells()[0].id, b.cells()[0].id);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_coordinates() {
        let grid = Grid::new(4, 3, &mut SequentialIds::new());
        assert_eq!(grid.index(1, 2), 9);
        assert_eq!(grid.coords(9), (1, 2));
        assert!(grid.get(4, 0).is_none());
        assert!(grid.get(0, 3).is_none());
        assert!(grid.get(3, 2).is_some());
    }

    #[test]
    fn test_score_and_max() {
        let grid = Grid::from_values(2, 2, &[2, 4, 0, 1024], &mut SequentialIds::new());
        assert_eq!(grid.score(), 1030);
        assert_eq!(grid.max_tile(), 1024);
        assert_eq!(grid.free_cells(), vec![2]);
        assert!(grid.has_free_cell());
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_values(2, 2, &[2, 0, 16, 4], &mut SequentialIds::new());
        assert_eq!(grid.to_string(), "    2    0\n   16    4\n");
    }
}
