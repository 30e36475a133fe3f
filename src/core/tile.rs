//! Tiles and tile identifiers.
//!
//! A tile is one cell of the grid: a numeric value plus an identity that
//! survives slides and merges. The identity exists for renderers that animate
//! tiles between positions; game logic never compares it.
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::{Tile, TileId};
//!
//! let a = Tile::new(2, TileId::from_raw(1));
//! let b = Tile::new(2, TileId::from_raw(2));
//!
//! assert!(a.same_value(&b));
//! assert_ne!(a, b);
//! assert!(Tile::empty(TileId::from_raw(3)).is_empty());
//! ```

use uuid::Uuid;

/// Opaque, unique identifier for a tile.
///
/// Backed by a UUID. Randomly generated ids are version-4 UUIDs; sequential
/// ids (see [`SequentialIds`](super::SequentialIds)) are plain counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(Uuid);

impl TileId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Build an id from a raw 128-bit value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(Uuid::from_u128(raw))
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One grid cell. `value == 0` is an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Tile value: 0 or a power of two.
    pub value: u32,
    /// Identity used only for UI transition tracking.
    pub id: TileId,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub const fn new(value: u32, id: TileId) -> Self {
        Self { value, id }
    }

    /// Create an empty (zero-valued) tile.
    #[must_use]
    pub const fn empty(id: TileId) -> Self {
        Self { value: 0, id }
    }

    /// Check if this cell is free.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Compare by value only, ignoring identity.
    #[must_use]
    pub const fn same_value(&self, other: &Tile) -> bool {
        self.value == other.value
    }
}
