//! Immutable token sequences.
//!
//! A `Sequence` wraps the tokens being compared, typically words or lines,
//! with an optional label used in diagnostics and transcripts. It is built
//! once by the caller and never mutated during a comparison.

use std::fmt;

use crate::primitives::Range;

/// An ordered, zero-indexed collection of tokens with an optional label.
#[derive(Clone)]
pub struct Sequence<T> {
    tokens: Vec<T>,
    label: Option<String>,
}

impl<T> Sequence<T> {
    /// Create an unlabeled sequence that owns `tokens`.
    pub fn new(tokens: Vec<T>) -> Sequence<T> {
        return Sequence {
            tokens,
            label: None,
        };
    }

    /// Attach a label for diagnostics.
    pub fn with_label(mut self, label: impl Into<String>) -> Sequence<T> {
        self.label = Some(label.into());
        return self;
    }

    pub fn label(&self) -> Option<&str> {
        return self.label.as_deref();
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.tokens.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.tokens.is_empty();
    }

    /// Token at `index`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn item(&self, index: usize) -> &T {
        return &self.tokens[index];
    }

    #[inline]
    pub fn tokens(&self) -> &[T] {
        return &self.tokens;
    }

    /// The range `[0, len)` covering every token.
    #[inline]
    pub fn full_range(&self) -> Range {
        return Range::at(0, self.tokens.len());
    }

    /// Tokens inside `range`, or `None` when it runs past the end.
    pub fn slice(&self, range: Range) -> Option<&[T]> {
        return self.tokens.get(range.to_std());
    }

    /// Iterate the tokens inside `range`, clamped to the sequence.
    pub fn iter_range(&self, range: Range) -> impl Iterator<Item = &T> + '_ {
        let end = range.end().min(self.tokens.len());
        let begin = range.begin().min(end);
        return self.tokens[begin..end].iter();
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    /// Sequences are equal when their tokens are; labels are ignored.
    fn eq(&self, other: &Self) -> bool {
        return self.tokens == other.tokens;
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("Sequence")
            .field("label", &self.label)
            .field("len", &self.tokens.len())
            .field("tokens", &self.tokens)
            .finish();
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(tokens: Vec<T>) -> Self {
        return Sequence::new(tokens);
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return Sequence::new(iter.into_iter().collect());
    }
}
