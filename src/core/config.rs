//! Configuration types.
//!
//! Hosts configure insertion odds, board size and game mode here rather
//! than in the engine. Every config has a `Default` matching classic 2048
//! and `with_*` builders for overrides:
//!
//! ```
//! use rust_2048::core::{ModeKind, SessionConfig};
//!
//! let config = SessionConfig::default()
//!     .with_mode(ModeKind::Compress)
//!     .with_seed(7);
//!
//! assert_eq!(config.width, 4);
//! assert_eq!(config.seed, 7);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Weighted table of tile values for random insertion.
///
/// Entries are kept sorted by descending weight (stable for ties), which is
/// the order weighted choice accumulates in. The lowest-weight entry is held
/// apart so a table always has one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(u32, f64)>", into = "Vec<(u32, f64)>")]
pub struct ProbabilityTable {
    leading: Vec<(u32, f64)>,
    last: (u32, f64),
    total_weight: f64,
}

impl ProbabilityTable {
    /// Build a table from `(value, weight)` pairs.
    ///
    /// Fails if the table is empty, a weight is not a positive finite number,
    /// or a value is not a power of two.
    pub fn new(entries: impl IntoIterator<Item = (u32, f64)>) -> EngineResult<Self> {
        let mut entries: Vec<(u32, f64)> = entries.into_iter().collect();
        for &(value, weight) in &entries {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(EngineError::InvalidProbabilityTable(format!(
                    "weight {weight} for value {value} must be positive"
                )));
            }
            if !value.is_power_of_two() {
                return Err(EngineError::InvalidProbabilityTable(format!(
                    "value {value} is not a power of two"
                )));
            }
        }

        // Stable: equal weights keep caller order.
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        let total_weight = entries.iter().map(|&(_, w)| w).sum();
        let Some(last) = entries.pop() else {
            return Err(EngineError::InvalidProbabilityTable("table is empty".into()));
        };

        Ok(Self {
            leading: entries,
            last,
            total_weight,
        })
    }

    /// Classic odds: 2 at weight 9, 4 at weight 1.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_static(&[(4, 1.0), (2, 9.0)])
    }

    /// Odds used to pre-fill Compress boards.
    #[must_use]
    pub fn compress() -> Self {
        Self::from_static(&[
            (2, 6.0),
            (4, 2.0),
            (8, 1.0),
            (16, 0.5),
            (32, 0.25),
            (64, 0.125),
            (128, 0.125),
        ])
    }

    fn from_static(entries: &[(u32, f64)]) -> Self {
        match Self::new(entries.iter().copied()) {
            Ok(table) => table,
            Err(err) => unreachable!("built-in probability table rejected: {err}"),
        }
    }

    /// Entries in descending weight order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.leading.iter().copied().chain(std::iter::once(self.last))
    }

    /// Every entry except the lowest-weight one.
    #[must_use]
    pub fn leading(&self) -> &[(u32, f64)] {
        &self.leading
    }

    /// Value drawn when a sample lands past every leading threshold.
    #[must_use]
    pub fn fallback(&self) -> u32 {
        self.last.0
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Probability of drawing `value`, or 0 if absent.
    #[must_use]
    pub fn probability(&self, value: u32) -> f64 {
        self.entries()
            .filter(|&(v, _)| v == value)
            .map(|(_, w)| w / self.total_weight)
            .sum()
    }
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<(u32, f64)>> for ProbabilityTable {
    type Error = EngineError;

    fn try_from(entries: Vec<(u32, f64)>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<ProbabilityTable> for Vec<(u32, f64)> {
    fn from(table: ProbabilityTable) -> Self {
        table.entries().collect()
    }
}

/// Parameters for one random insertion call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertConfig {
    /// Number of tiles to insert.
    pub times: usize,
    /// Value odds.
    pub table: ProbabilityTable,
}

impl Default for InsertConfig {
    fn default() -> Self {
        Self {
            times: 1,
            table: ProbabilityTable::standard(),
        }
    }
}

impl InsertConfig {
    /// Insert `times` tiles with the given odds.
    #[must_use]
    pub fn new(times: usize, table: ProbabilityTable) -> Self {
        Self { times, table }
    }

    #[must_use]
    pub fn with_times(mut self, times: usize) -> Self {
        self.times = times;
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: ProbabilityTable) -> Self {
        self.table = table;
        self
    }
}

/// Board generation rules for the Compress mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompressConfig {
    /// Odds for pre-filling every cell.
    pub table: ProbabilityTable,
    /// Boards whose total equals this are discarded.
    pub forbidden_sum: u64,
    /// Generation attempts before giving up.
    pub max_attempts: usize,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            table: ProbabilityTable::compress(),
            forbidden_sum: 512,
            max_attempts: 1000,
        }
    }
}

impl CompressConfig {
    #[must_use]
    pub fn with_forbidden_sum(mut self, sum: u64) -> Self {
        self.forbidden_sum = sum;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: ProbabilityTable) -> Self {
        self.table = table;
        self
    }
}

/// Which rule set a session plays by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    /// Classic 2048: two starting tiles, one new tile per move, can end.
    #[default]
    Standard,
    /// Pre-filled board, no insertion after moves, never ends.
    Compress,
}

/// Everything needed to start a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Rule set.
    pub mode: ModeKind,

    /// Seed for the gameplay RNG. Same seed replays the same game.
    pub seed: u64,

    /// Board width in cells.
    pub width: usize,

    /// Board height in cells.
    pub height: usize,

    /// Tiles inserted into a new Standard board.
    pub initial_tiles: usize,

    /// Odds for Standard insertions.
    pub table: ProbabilityTable,

    /// Compress generation rules.
    pub compress: CompressConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: ModeKind::Standard,
            seed: 42,
            width: 4,
            height: 4,
            initial_tiles: 2,
            table: ProbabilityTable::standard(),
            compress: CompressConfig::default(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_mode(mut self, mode: ModeKind) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set board dimensions.
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

    #[must_use]
    pub fn with_compress(mut self, compress: CompressConfig) -> Self {
        self.compress = compress;
        self
    }
}
