//! Comparison settings.

use std::hash::Hash;

use crate::engine::Comparator;
use crate::error::{Error, Result};
use crate::locate::Strategy;
use crate::sequence::Sequence;
use crate::sink::DiffSink;

/// Everything a caller can tune about a comparison.
///
/// ```
/// use runsplit::{CompareConfig, Sequence, Strategy};
/// use runsplit::sink::NoopSink;
///
/// let config = CompareConfig::new()
///     .strategy(Strategy::Dense)
///     .min_block_size(2);
///
/// let a: Sequence<&str> = "a b c d".split(' ').collect();
/// let b: Sequence<&str> = "a x c d".split(' ').collect();
/// assert_eq!(config.compare(&a, &b, &mut NoopSink).unwrap(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompareConfig {
    /// Which largest-run locator to use.
    pub strategy: Strategy,
    /// Runs shorter than this count as differences.
    pub min_block_size: usize,
    /// Skip the comparison, returning 0, when the length ratio of the inputs
    /// already rules out reaching this similarity.
    pub min_expectation: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        return CompareConfig {
            strategy: Strategy::default(),
            min_block_size: 0,
            min_expectation: 0.0,
        };
    }
}

impl CompareConfig {
    pub fn new() -> CompareConfig {
        return CompareConfig::default();
    }

    pub fn strategy(mut self, strategy: Strategy) -> CompareConfig {
        self.strategy = strategy;
        return self;
    }

    pub fn min_block_size(mut self, min_block_size: usize) -> CompareConfig {
        self.min_block_size = min_block_size;
        return self;
    }

    pub fn min_expectation(mut self, min_expectation: f64) -> CompareConfig {
        self.min_expectation = min_expectation;
        return self;
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_expectation) {
            return Err(Error::InvalidExpectation(self.min_expectation));
        }
        return Ok(());
    }

    pub fn comparator(&self) -> Comparator {
        return Comparator::new(self.strategy);
    }

    /// Run the guarded comparison with these settings.
    pub fn compare<T, S>(&self, a: &Sequence<T>, b: &Sequence<T>, sink: &mut S) -> Result<f64>
    where
        T: Eq + Hash,
        S: DiffSink<T> + ?Sized,
    {
        self.validate()?;
        return self.comparator().compare_with_expectation(
            self.min_expectation,
            a,
            b,
            sink,
            self.min_block_size,
        );
    }
}
