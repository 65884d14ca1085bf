//! Half-open integer ranges over sequence indices.

use std::fmt;

use crate::error::{Error, Result};

/// A half-open interval `[begin, end)`.
///
/// The invariant `begin <= end` holds for every value of this type: the
/// fallible constructors reject anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    begin: usize,
    end: usize,
}

impl Range {
    /// Create a range, failing when `begin > end`.
    pub fn new(begin: usize, end: usize) -> Result<Range> {
        if begin > end {
            return Err(Error::InvalidRange { begin, end });
        }
        return Ok(Range { begin, end });
    }

    /// The empty range at zero.
    #[inline]
    pub const fn empty() -> Range {
        return Range { begin: 0, end: 0 };
    }

    /// A range of `len` indices starting at `begin`.
    #[inline]
    pub const fn at(begin: usize, len: usize) -> Range {
        return Range {
            begin,
            end: begin + len,
        };
    }

    /// Reinitialize this range in place.
    ///
    /// On failure the range is left untouched.
    pub fn reset(&mut self, begin: usize, end: usize) -> Result<()> {
        *self = Range::new(begin, end)?;
        return Ok(());
    }

    /// Make this range empty.
    #[inline]
    pub fn clear(&mut self) {
        *self = Range::empty();
    }

    /// Inclusive start.
    #[inline]
    pub const fn begin(&self) -> usize {
        return self.begin;
    }

    /// Exclusive end.
    #[inline]
    pub const fn end(&self) -> usize {
        return self.end;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.end - self.begin;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.begin == self.end;
    }

    /// Check whether `value` lies inside the range.
    #[inline]
    pub const fn contains(&self, value: usize) -> bool {
        return value >= self.begin && value < self.end;
    }

    /// Grow the range minimally so that it contains `value`.
    ///
    /// An empty range collapses to the unit range at `value`.
    pub fn extend(&mut self, value: usize) {
        if self.is_empty() {
            self.begin = value;
            self.end = value + 1;
        } else if value >= self.end {
            self.end = value + 1;
        } else if value < self.begin {
            self.begin = value;
        }
    }

    /// Check whether two ranges share at least one index.
    ///
    /// Tested by containment of either range's first or last index in the
    /// other. An empty range has no endpoints and intersects nothing.
    pub fn intersects(&self, other: &Range) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        return self.contains(other.begin)
            || self.contains(other.end - 1)
            || other.contains(self.begin)
            || other.contains(self.end - 1);
    }

    /// Iterate the indices in the range.
    #[inline]
    pub fn iter(&self) -> std::ops::Range<usize> {
        return self.begin..self.end;
    }

    /// Convert into a standard library range, e.g. for slicing.
    #[inline]
    pub const fn to_std(&self) -> std::ops::Range<usize> {
        return self.begin..self.end;
    }
}

impl IntoIterator for Range {
    type Item = usize;
    type IntoIter = std::ops::Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        return self.to_std();
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "[{}, {})", self.begin, self.end);
    }
}
