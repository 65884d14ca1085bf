//! Matched runs between two sequences.

use super::range::Range;

/// A contiguous run of equal tokens, located in both sequences.
///
/// For a run produced by a correct locator both ranges have the same
/// length. The engine checks this before trusting a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlap {
    /// Range of the run in the left sequence.
    pub a: Range,
    /// Range of the run in the right sequence.
    pub b: Range,
}

impl Overlap {
    /// An overlap with two empty ranges: no run found.
    #[inline]
    pub const fn none() -> Overlap {
        return Overlap {
            a: Range::empty(),
            b: Range::empty(),
        };
    }

    /// A run of `len` tokens whose exclusive ends are `end_a` and `end_b`.
    ///
    /// Locators discover runs by their last matched index, so this is the
    /// natural constructor for them. Requires `len <= end_a` and `len <= end_b`.
    #[inline]
    pub const fn ending_at(end_a: usize, end_b: usize, len: usize) -> Overlap {
        debug_assert!(len <= end_a && len <= end_b);
        return Overlap {
            a: Range::at(end_a - len, len),
            b: Range::at(end_b - len, len),
        };
    }

    /// True when either side is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.a.is_empty() || self.b.is_empty();
    }

    /// Run length, taken from the left side.
    #[inline]
    pub const fn len(&self) -> usize {
        return self.a.len();
    }

    /// Both sides have the same length.
    #[inline]
    pub const fn is_congruent(&self) -> bool {
        return self.a.len() == self.b.len();
    }

    /// Empty both ranges.
    #[inline]
    pub fn clear(&mut self) {
        *self = Overlap::none();
    }

    /// Swap the two sides.
    #[inline]
    pub const fn mirrored(&self) -> Overlap {
        return Overlap {
            a: self.b,
            b: self.a,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_empty() {
        let o = Overlap::none();
        assert!(o.is_empty());
        assert_eq!(o.len(), 0);
        assert!(o.is_congruent());
    }

    #[test]
    fn ending_at() {
        let o = Overlap::ending_at(5, 9, 3);
        assert_eq!(o.a, Range::at(2, 3));
        assert_eq!(o.b, Range::at(6, 3));
        assert_eq!(o.len(), 3);
        assert!(!o.is_empty());
        assert!(o.is_congruent());
    }

    #[test]
    fn one_empty_side_is_empty() {
        let o = Overlap {
            a: Range::at(1, 2),
            b: Range::empty(),
        };
        assert!(o.is_empty());
        assert!(!o.is_congruent());
    }

    #[test]
    fn clear_and_mirror() {
        let mut o = Overlap::ending_at(4, 2, 2);
        let m = o.mirrored();
        assert_eq!(m.a, Range::at(0, 2));
        assert_eq!(m.b, Range::at(2, 2));
        o.clear();
        assert_eq!(o, Overlap::none());
    }
}
