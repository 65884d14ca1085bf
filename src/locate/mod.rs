//! Largest-run locators.
//!
//! A locator answers one question for the engine: within `range_a` of the
//! left sequence and `range_b` of the right one, where is the longest
//! contiguous run of equal tokens?
//!
//! All locators are built on the same quantity. For every pair of 1-based
//! end positions `(i, j)` let `run(i, j)` be the length of the equal-token
//! run ending exactly at `a[i - 1]` and `b[j - 1]`:
//!
//! ```text
//! run(i, j) = 0                  if a[i-1] != b[j-1]
//! run(i, j) = 1                  if equal and (i == 1 or j == 1)
//! run(i, j) = run(i-1, j-1) + 1  otherwise
//! ```
//!
//! Inside a queried sub-rectangle the usable length at `(i, j)` is clipped so
//! the run cannot start before `range_a.begin()` or `range_b.begin()`.
//!
//! # Implementations
//!
//! | Locator | Context | Memory | Per query |
//! |---------|---------|--------|-----------|
//! | `Dense` | full (A+1) x (B+1) table | O(A·B) | area of the query |
//! | `Rolling` | two rows of width B | O(B) | area, recomputed |
//! | `Sparse` | non-zero cells per row | O(matching pairs) | matches in the query |
//!
//! # Tie-break
//!
//! Every locator scans end positions `i` ascending, then `j` ascending, and
//! only a strictly longer run replaces the current best. The first run of
//! maximal length (lowest `i`, then lowest `j`) wins. The conformance suite
//! holds all locators to identical results.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::primitives::{Overlap, Range};
use crate::sequence::Sequence;

mod dense;
mod rolling;
mod sparse;

pub use dense::{Dense, DenseTable};
pub use rolling::{Rolling, RollingRows};
pub use sparse::{Sparse, SparseRows};

/// Finds the largest common run inside a pair of sub-ranges.
///
/// The context is built once per top-level comparison from the *full*
/// sequences and then queried with ever smaller sub-ranges of those same
/// sequences. It is never shared between comparisons.
pub trait Locator {
    /// Precomputed per-comparison state.
    type Context;

    /// Build the context for comparing `a` against `b`.
    fn build_context<T: Eq + Hash>(&self, a: &Sequence<T>, b: &Sequence<T>) -> Self::Context;

    /// Locate the longest run lying within both `range_a` and `range_b`.
    ///
    /// Returns `Overlap::none()` when the sub-rectangle holds no equal tokens.
    fn find_largest_run<T: Eq>(
        &self,
        a: &Sequence<T>,
        range_a: Range,
        b: &Sequence<T>,
        range_b: Range,
        context: &mut Self::Context,
    ) -> Overlap;
}

/// The closed set of locator strategies, chosen when building a comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Full precomputed table.
    Dense,
    /// Two recycled rows, recomputed per query.
    Rolling,
    /// Precomputed non-zero cells only. Best when the inputs share few tokens.
    #[default]
    Sparse,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Dense, Strategy::Rolling, Strategy::Sparse];

    pub fn name(&self) -> &'static str {
        return match self {
            Strategy::Dense => "dense",
            Strategy::Rolling => "rolling",
            Strategy::Sparse => "sparse",
        };
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(Strategy::Dense),
            "rolling" | "lowmem" => Ok(Strategy::Rolling),
            "sparse" | "hash" => Ok(Strategy::Sparse),
            other => Err(format!(
                "unknown strategy '{other}' (expected dense, rolling or sparse)"
            )),
        };
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

/// Best run seen so far while scanning end positions in `(i, j)` order.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BestRun {
    len: usize,
    end_a: usize,
    end_b: usize,
}

impl BestRun {
    /// Offer the run of `len` tokens ending at `(end_a, end_b)`.
    /// Only a strictly longer run replaces the current one.
    #[inline(always)]
    pub(crate) fn offer(&mut self, end_a: usize, end_b: usize, len: usize) {
        if len > self.len {
            self.len = len;
            self.end_a = end_a;
            self.end_b = end_b;
        }
    }

    pub(crate) fn into_overlap(self) -> Overlap {
        if self.len == 0 {
            return Overlap::none();
        }
        return Overlap::ending_at(self.end_a, self.end_b, self.len);
    }
}
