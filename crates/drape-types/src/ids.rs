//! Strongly-typed identifiers for simulation entities.
//!
//! The newtype wrapper keeps particle indices from being mixed with
//! triangle numbers or raw loop counters at API boundaries.

use serde::{Deserialize, Serialize};

/// Index into the particle arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
