//! Strongly typed city identifier.
//!
//! `CityId` doubles as the graph vertex index: a table of `n` cities is
//! expected to use ids `0..n`.  The inner integer is `pub` so loaders can
//! build ids straight from parsed columns, but callers should prefer the
//! `.index()` helper when indexing into per-vertex `Vec`s.

use std::fmt;

/// Identifier of a city, and of the graph vertex that represents it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityId(pub u32);

impl CityId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.0)
    }
}

impl From<CityId> for usize {
    #[inline(always)]
    fn from(id: CityId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for CityId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<CityId, Self::Error> {
        u32::try_from(n).map(CityId)
    }
}
