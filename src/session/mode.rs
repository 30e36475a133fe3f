//! Game modes: the rules a session plays by.
//!
//! A mode decides three things:
//! - How a new board is generated
//! - What happens to the board after a move
//! - Whether the game can still continue
//!
//! The session calls into a `GameMode` but never interprets mode-specific
//! rules itself. Both built-in modes share the grid engine unchanged.

use log::{debug, trace};

use crate::core::{
    CompressConfig, Direction, EngineError, EngineResult, IdSource, InsertConfig, ModeKind,
    ProbabilityTable, RandomSource, SessionConfig,
};
use crate::grid::{can_move, insert_random, merge, Grid, DEFAULT_SIZE};

/// Rules for one game variant.
///
/// ## Implementation Notes
///
/// - `create`: Return a fresh board; may retry internally
/// - `play`: Compute the board after a move; must not commit anything
/// - `is_playable`: Return false only in a terminal state
pub trait GameMode {
    /// Generate a new board.
    fn create(&self, rng: &mut dyn RandomSource, ids: &mut dyn IdSource) -> EngineResult<Grid>;

    /// Compute the board that results from moving `grid` in `direction`.
    fn play(
        &self,
        grid: &Grid,
        direction: Direction,
        rng: &mut dyn RandomSource,
        ids: &mut dyn IdSource,
    ) -> EngineResult<Grid>;

    /// Check if at least one legal move remains.
    fn is_playable(&self, grid: &Grid) -> bool;
}

/// Classic 2048.
///
/// Starts with two random tiles; every move that changes the board adds one
/// more. The game ends when the board is full and no move changes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Standard {
    width: usize,
    height: usize,
    initial_tiles: usize,
    table: ProbabilityTable,
}

impl Default for Standard {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            initial_tiles: 2,
            table: ProbabilityTable::standard(),
        }
    }
}

impl Standard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a `width x height` board.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: ProbabilityTable) -> Self {
        self.table = table;
        self
    }
}

impl GameMode for Standard {
    fn create(&self, rng: &mut dyn RandomSource, ids: &mut dyn IdSource) -> EngineResult<Grid> {
        let grid = Grid::new(self.width, self.height, ids);
        let config = InsertConfig::new(self.initial_tiles, self.table.clone());
        insert_random(&grid, &config, rng)
    }

    fn play(
        &self,
        grid: &Grid,
        direction: Direction,
        rng: &mut dyn RandomSource,
        ids: &mut dyn IdSource,
    ) -> EngineResult<Grid> {
        let merged = merge(grid, direction, ids);
        if merged.equal(grid) {
            trace!("move {direction} left the board unchanged");
            return Ok(merged);
        }

        // A move that changed the board always leaves a free cell.
        insert_random(&merged, &InsertConfig::new(1, self.table.clone()), rng)
    }

    fn is_playable(&self, grid: &Grid) -> bool {
        grid.has_free_cell() || Direction::ALL.iter().any(|&d| can_move(grid, d))
    }
}

/// Pre-filled board with no insertions and no terminal state.
///
/// Boards are regenerated until their total differs from
/// `CompressConfig::forbidden_sum`.
#[derive(Clone, Debug, PartialEq)]
pub struct Compress {
    width: usize,
    height: usize,
    config: CompressConfig,
}

impl Default for Compress {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            config: CompressConfig::default(),
        }
    }
}

impl Compress {
    #[must_use]
    pub fn new(config: CompressConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Use a `width x height` board.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn config(&self) -> &CompressConfig {
        &self.config
    }
}

impl GameMode for Compress {
    fn create(&self, rng: &mut dyn RandomSource, ids: &mut dyn IdSource) -> EngineResult<Grid> {
        let fill = InsertConfig::new(self.width * self.height, self.config.table.clone());

        for attempt in 1..=self.config.max_attempts {
            let empty = Grid::new(self.width, self.height, ids);
            let grid = insert_random(&empty, &fill, rng)?;

            if grid.score() != self.config.forbidden_sum {
                debug!("compress board generated on attempt {attempt}, total {}", grid.score());
                return Ok(grid);
            }
            trace!("rejected compress board with total {}", grid.score());
        }

        Err(EngineError::Generation {
            attempts: self.config.max_attempts,
        })
    }

    fn play(
        &self,
        grid: &Grid,
        direction: Direction,
        _rng: &mut dyn RandomSource,
        ids: &mut dyn IdSource,
    ) -> EngineResult<Grid> {
        Ok(merge(grid, direction, ids))
    }

    fn is_playable(&self, _grid: &Grid) -> bool {
        true
    }
}

/// Either built-in mode, chosen at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Standard(Standard),
    Compress(Compress),
}

impl Mode {
    /// Build the mode a session config asks for.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.mode {
            ModeKind::Standard => Mode::Standard(
                Standard::new()
                    .with_size(config.width, config.height)
                    .with_initial_tiles(config.initial_tiles)
                    .with_table(config.table.clone()),
            ),
            ModeKind::Compress => Mode::Compress(
                Compress::new(config.compress.clone()).with_size(config.width, config.height),
            ),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Standard(_) => ModeKind::Standard,
            Mode::Compress(_) => ModeKind::Compress,
        }
    }

    fn rules(&self) -> &dyn GameMode {
        match self {
            Mode::Standard(m) => m,
            Mode::Compress(m) => m,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Standard(Standard::default())
    }
}

impl From<Standard> for Mode {
    fn from(mode: Standard) -> Self {
        Mode::Standard(mode)
    }
}

impl From<Compress> for Mode {
    fn from(mode: Compress) -> Self {
        Mode::Compress(mode)
    }
}

impl GameMode for Mode {
    fn create(&self, rng: &mut dyn RandomSource, ids: &mut dyn IdSource) -> EngineResult<Grid> {
        self.rules().create(rng, ids)
    }

    fn play(
        &self,
        grid: &Grid,
        direction: Direction,
        rng: &mut dyn RandomSource,
        ids: &mut dyn IdSource,
    ) -> EngineResult<Grid> {
        self.rules().play(grid, direction, rng, ids)
    }

    fn is_playable(&self, grid: &Grid) -> bool {
        self.rules().is_playable(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRandom, SequentialIds};

    #[test]
    fn test_standard_create_has_two_tiles() {
        let mut rng = GameRng::new(42);
        let mut ids = SequentialIds::new();

        let grid = Standard::new().create(&mut rng, &mut ids).unwrap();

        assert_eq!((grid.width(), grid.height()), (4, 4));
        assert_eq!(grid.free_cells().len(), 14);
        assert!(grid.values().iter().all(|&v| v == 0 || v == 2 || v == 4));
    }

    #[test]
    fn test_standard_play_inserts_after_change() {
        let mut ids = SequentialIds::new();
        let grid = Grid::from_values(2, 2, &[0, 2, 0, 0], &mut ids);
        let mut rng = ScriptedRandom::constant(0.0);

        let next = Standard::new().play(&grid, Direction::Left, &mut rng, &mut ids).unwrap();

        // Slide to [2,0], then a 2 lands in the first free cell.
        assert_eq!(next.values(), vec![2, 2, 0, 0]);
    }

    #[test]
    fn test_standard_play_no_change_skips_insert() {
        let mut ids = SequentialIds::new();
        let grid = Grid::from_values(2, 2, &[2, 0, 4, 0], &mut ids);
        let mut rng = ScriptedRandom::constant(0.0);

        let next = Standard::new().play(&grid, Direction::Left, &mut rng, &mut ids).unwrap();

        assert_eq!(next, grid);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_standard_terminal() {
        let mut ids = SequentialIds::new();
        let stuck = Grid::from_values(2, 2, &[2, 4, 4, 2], &mut ids);
        let mergeable = Grid::from_values(2, 2, &[2, 2, 4, 8], &mut ids);

        assert!(!Standard::new().is_playable(&stuck));
        assert!(Standard::new().is_playable(&mergeable));
    }

    #[test]
    fn test_compress_create_fills_board() {
        let mut rng = GameRng::new(3);
        let mut ids = SequentialIds::new();

        let grid = Compress::default().create(&mut rng, &mut ids).unwrap();

        assert!(!grid.has_free_cell());
        assert_ne!(grid.score(), 512);
    }

    #[test]
    fn test_compress_gives_up_on_forbidden_sum() {
        // 0.96 always selects 32; sixteen 32s total exactly 512.
        let mut rng = ScriptedRandom::constant(0.96);
        let mut ids = SequentialIds::new();
        let mode = Compress::new(CompressConfig::default().with_max_attempts(5));

        let err = mode.create(&mut rng, &mut ids).unwrap_err();
        assert_eq!(err, EngineError::Generation { attempts: 5 });
    }

    #[test]
    fn test_compress_play_never_inserts() {
        let mut ids = SequentialIds::new();
        let grid = Grid::from_values(2, 2, &[2, 2, 4, 8], &mut ids);
        let mut rng = ScriptedRandom::constant(0.0);

        let next = Compress::default().play(&grid, Direction::Left, &mut rng, &mut ids).unwrap();

        assert_eq!(next.values(), vec![4, 0, 4, 8]);
        assert_eq!(rng.draws(), 0);
        assert!(Compress::default().is_playable(&next));
    }

    #[test]
    fn test_mode_from_config() {
        let config = SessionConfig::default().with_mode(ModeKind::Compress).with_size(3, 5);
        let mode = Mode::from_config(&config);

        assert_eq!(mode.kind(), ModeKind::Compress);
        let grid = mode.create(&mut GameRng::new(1), &mut SequentialIds::new()).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 5));
    }
}
