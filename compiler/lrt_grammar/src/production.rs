//! Productions and production ids.

use smallvec::SmallVec;
use std::fmt;

use crate::Symbol;

/// Index into the production list of a [`Grammar`](crate::Grammar).
///
/// Productions are deduplicated on construction, so two ids are equal
/// exactly when their `(lhs, rhs)` pairs are equal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ProductionId(u32);

impl ProductionId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ProductionId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductionId({})", self.0)
    }
}

/// A single production `lhs -> rhs`.
///
/// Most right-hand sides are short, so they are stored inline.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Production {
    lhs: Symbol,
    rhs: SmallVec<[Symbol; 4]>,
}

impl Production {
    pub fn new(lhs: Symbol, rhs: impl IntoIterator<Item = Symbol>) -> Self {
        Production {
            lhs,
            rhs: rhs.into_iter().collect(),
        }
    }

    #[inline]
    pub fn lhs(&self) -> Symbol {
        self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    /// Number of right-hand-side symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    /// True for an empty production.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }
}
