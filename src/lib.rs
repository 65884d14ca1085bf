//! Runsplit - similarity scores and diff transcripts for token sequences.
//!
//! Two sequences of tokens (words, lines, paragraphs, anything comparable)
//! are compared by repeatedly splitting off their largest common contiguous
//! run and recursing on what lies before and after it. The result is a
//! similarity in `[0, 1]`, roughly "how much of the longer sequence is
//! covered by the shorter one", plus an optional in-order transcript of
//! common and different segments.
//!
//! # Quick Start
//!
//! ```
//! use runsplit::{Comparator, Sequence, Strategy};
//! use runsplit::sink::{Side, Transcript};
//!
//! let a: Sequence<&str> = "a b c d".split(' ').collect();
//! let b: Sequence<&str> = "a x c d".split(' ').collect();
//!
//! let mut transcript = Transcript::new();
//! let similarity = Comparator::new(Strategy::Sparse)
//!     .compare_with_sink(&a, &b, &mut transcript, 0)
//!     .unwrap();
//!
//! assert_eq!(similarity, 0.75);
//! assert_eq!(transcript.common_len(Side::Left), 3);
//! ```
//!
//! # Locators
//!
//! | Strategy | Memory | Notes |
//! |----------|--------|-------|
//! | `Dense` | O(A·B) | one table, cheapest queries |
//! | `Rolling` | O(B) | recomputes each query |
//! | `Sparse` | O(matches) | default; best when few tokens are shared |
//!
//! All three return identical runs, so they give identical similarities
//! and transcripts.

pub mod config;
pub mod engine;
pub mod error;
pub mod html;
pub mod locate;
pub mod primitives;
pub mod sequence;
pub mod sink;
pub mod tokenize;

use std::hash::Hash;

pub use config::CompareConfig;
pub use engine::{Comparator, compare_with};
pub use error::{Error, Result};
pub use locate::{Locator, Strategy};
pub use primitives::{Overlap, Range};
pub use sequence::Sequence;
pub use sink::{DiffSink, EventType, Side};
pub use tokenize::Tokenizer;

/// Similarity of `a` and `b` using the default strategy.
pub fn compare<T: Eq + Hash>(a: &Sequence<T>, b: &Sequence<T>) -> Result<f64> {
    return Comparator::default().compare(a, b);
}
