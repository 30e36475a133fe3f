//! Randomness and identifier sources.
//!
//! The grid engine never touches a global RNG. Every operation that needs
//! randomness takes a [`RandomSource`], and every operation that creates
//! tiles takes an [`IdSource`]. Hosts pick the implementation:
//!
//! - [`GameRng`]: deterministic ChaCha8 stream, reseedable by the host
//! - [`ScriptedRandom`]: replays a fixed list of samples
//! - [`RandomIds`]: UUID-v4 ids from their own stream
//! - [`SequentialIds`]: counting ids
//!
//! ## Replay
//!
//! ```
//! use rust_2048::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.uniform(), b.uniform());
//!
//! // Seed phrases (e.g. from a shared link) map to the same stream.
//! let mut c = GameRng::from_phrase("daily-puzzle");
//! let mut d = GameRng::from_phrase("daily-puzzle");
//! assert_eq!(c.uniform(), d.uniform());
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use super::tile::TileId;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Draw one sample in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Pick an index in `0..len` uniformly.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on empty range");
        let idx = (self.uniform() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

/// Source of fresh tile identifiers.
pub trait IdSource {
    /// Produce an identifier not handed out before by this source.
    fn new_id(&mut self) -> TileId;
}

/// Deterministic RNG for gameplay.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// Context streams are independent of the gameplay sequence, so identifier
/// generation never shifts which tiles get dealt.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a free-form seed phrase.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self::new(hash_seed(0, phrase))
    }

    /// Restart the stream from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(hash_seed(self.seed, context))
    }

    /// Fill a buffer with random bytes.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }
}

impl RandomSource for GameRng {
    fn uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

fn hash_seed(seed: u64, context: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;

    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    context.hash(&mut hasher);
    hasher.finish()
}

/// Replays a fixed list of samples, cycling when exhausted.
///
/// ```
/// use rust_2048::core::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new(vec![0.5, 0.0]);
/// assert_eq!(rng.uniform(), 0.5);
/// assert_eq!(rng.uniform(), 0.0);
/// assert_eq!(rng.uniform(), 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    samples: Vec<f64>,
    pos: usize,
}

impl ScriptedRandom {
    /// Create a scripted source. Samples are clamped into `[0, 1)`.
    #[must_use]
    pub fn new(samples: Vec<f64>) -> Self {
        assert!(!samples.is_empty(), "ScriptedRandom needs at least one sample");
        let samples = samples
            .into_iter()
            .map(|s| s.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { samples, pos: 0 }
    }

    /// A source that always returns the same sample.
    #[must_use]
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }

    /// Number of samples drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f64 {
        let sample = self.samples[self.pos % self.samples.len()];
        self.pos += 1;
        sample
    }
}

/// Random version-4 UUID identifiers.
///
/// Draws from its own [`GameRng`] stream so ids are reproducible under a
/// seed without consuming gameplay randomness.
#[derive(Clone, Debug)]
pub struct RandomIds {
    rng: GameRng,
}

impl RandomIds {
    /// Create an id source seeded from a gameplay RNG's "tile-ids" context.
    #[must_use]
    pub fn from_rng(rng: &GameRng) -> Self {
        Self {
            rng: rng.for_context("tile-ids"),
        }
    }

    /// Create an id source with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(&GameRng::new(seed))
    }
}

impl IdSource for RandomIds {
    fn new_id(&mut self) -> TileId {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        TileId::new(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

/// Counting identifiers starting at 1.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u128 {
        self.next
    }
}

impl IdSource for SequentialIds {
    fn new_id(&mut self) -> TileId {
        self.next += 1;
        TileId::from_raw(self.next)
    }
}
