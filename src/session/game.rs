//! Stateful game session.

use log::debug;

use super::mode::{GameMode, Mode};
use super::score::ScoreTracker;
use crate::core::{
    Direction, EngineResult, GameRng, IdSource, RandomIds, RandomSource, SessionConfig,
};
use crate::grid::Grid;

/// One game in progress.
///
/// Owns the current grid plus the randomness and id sources it was built
/// with. Not synchronized: callers sharing a session across threads must
/// serialize `play` calls themselves.
///
/// ```
/// use rust_2048::core::{Direction, SessionConfig};
/// use rust_2048::session::Session;
///
/// let mut session = Session::from_config(&SessionConfig::default().with_seed(7))?;
/// let before = session.score();
///
/// session.play(Direction::Left)?;
///
/// assert!(session.score() >= before);
/// assert!(session.is_playable());
/// # Ok::<(), rust_2048::core::EngineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Session<M = Mode, R = GameRng, I = RandomIds> {
    mode: M,
    grid: Grid,
    rng: R,
    ids: I,
    score: ScoreTracker,
    moves: u32,
}

impl Session {
    /// Start a session from a config, seeding the RNG from `config.seed`.
    ///
    /// # Errors
    ///
    /// Fails if the mode cannot generate a starting board.
    pub fn from_config(config: &SessionConfig) -> EngineResult<Self> {
        let rng = GameRng::new(config.seed);
        let ids = RandomIds::from_rng(&rng);
        Self::new(Mode::from_config(config), rng, ids)
    }
}

impl<M: GameMode, R: RandomSource, I: IdSource> Session<M, R, I> {
    /// Start a session with a freshly generated board.
    ///
    /// # Errors
    ///
    /// Fails if the mode cannot generate a starting board.
    pub fn new(mode: M, mut rng: R, mut ids: I) -> EngineResult<Self> {
        let grid = mode.create(&mut rng, &mut ids)?;
        debug!("session created, starting score {}", grid.score());
        Ok(Self::with_grid(mode, grid, rng, ids))
    }

    /// Start a session from an existing board.
    #[must_use]
    pub fn with_grid(mode: M, grid: Grid, rng: R, ids: I) -> Self {
        let mut score = ScoreTracker::new();
        score.rebaseline(grid.score());
        Self {
            mode,
            grid,
            rng,
            ids,
            score,
            moves: 0,
        }
    }

    /// Replace the current board with a newly generated one.
    ///
    /// # Errors
    ///
    /// Fails if generation fails; the current board is kept in that case.
    pub fn reset(&mut self) -> EngineResult<()> {
        let grid = self.mode.create(&mut self.rng, &mut self.ids)?;
        debug!("session reset after {} moves, final score {}", self.moves, self.grid.score());

        self.score.rebaseline(grid.score());
        self.grid = grid;
        self.moves = 0;
        Ok(())
    }

    /// Make a move and commit the result.
    ///
    /// Returns the new board. A move that changes nothing still succeeds and
    /// returns an equal board.
    ///
    /// # Errors
    ///
    /// Propagates insertion failures from the mode.
    pub fn play(&mut self, direction: Direction) -> EngineResult<Grid> {
        self.advance(direction, true)
    }

    /// Compute a move without committing it.
    ///
    /// Draws from the session's RNG exactly as `play` would.
    ///
    /// # Errors
    ///
    /// Propagates insertion failures from the mode.
    pub fn dry_run(&mut self, direction: Direction) -> EngineResult<Grid> {
        self.advance(direction, false)
    }

    fn advance(&mut self, direction: Direction, commit: bool) -> EngineResult<Grid> {
        let next = self.mode.play(&self.grid, direction, &mut self.rng, &mut self.ids)?;
        if !commit {
            return Ok(next);
        }

        if !next.equal(&self.grid) {
            self.moves += 1;
        }
        self.grid = next.clone();
        self.score.observe(self.grid.score());
        debug!("move {direction} committed, score {}", self.grid.score());

        Ok(next)
    }

    /// Check if the game can continue.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.mode.is_playable(&self.grid)
    }

    /// Current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Sum of all tile values on the current board.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.grid.score()
    }

    /// Committed moves that changed the board since the last reset.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn mode(&self) -> &M {
        &self.mode
    }

    /// Score observer, for inspecting regression diagnostics.
    #[must_use]
    pub fn score_tracker(&self) -> &ScoreTracker {
        &self.score
    }
}

impl<M: GameMode> Session<M, GameRng, RandomIds> {
    /// Reseed the RNG and id streams, then start a new board.
    ///
    /// # Errors
    ///
    /// Fails if the mode cannot generate a board.
    pub fn reseed(&mut self, seed: u64) -> EngineResult<()> {
        self.rng.reseed(seed);
        self.ids = RandomIds::from_rng(&self.rng);
        self.reset()
    }
}
