//! Engine error types.

/// Errors raised by the grid engine and game sessions.
///
/// All merge operations are total; only insertion, board generation and
/// configuration parsing can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Random insertion found no free cell. Callers must ensure room exists.
    #[error("no free cell left after inserting {inserted} of {requested} tiles")]
    NoFreeCell { requested: usize, inserted: usize },

    /// Board generation gave up after the configured number of attempts.
    #[error("could not generate a board after {attempts} attempts")]
    Generation { attempts: usize },

    /// Probability table failed validation.
    #[error("invalid probability table: {0}")]
    InvalidProbabilityTable(String),

    /// Direction name could not be parsed.
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
