//! The recursive splitting engine.
//!
//! A comparison peels the largest common run (the pivot) off the current
//! pair of ranges, then handles what lies before and after it the same way:
//!
//! ```text
//!   a: [ before_a ][ pivot ][ after_a ]
//!   b: [ before_b   ][ pivot ][ after_b ]
//!
//!   result = |pivot| / max(|a|, |b|)
//!          + before_weight * result(before_a, before_b)
//!          + after_weight  * result(after_a, after_b)
//! ```
//!
//! where each weight is the larger of the two sides' share of its own range.
//! Ranges with no usable run contribute zero and are reported as different.
//!
//! The recursion is unrolled onto a heap stack of frames so that deep
//! alternating inputs cannot exhaust the thread stack. The arithmetic is
//! evaluated in the same order as the direct recursion, and events come out
//! in left-to-right order: before, pivot, after.

use std::hash::Hash;

use crate::error::{Error, Result};
use crate::locate::{Dense, Locator, Rolling, Sparse, Strategy};
use crate::primitives::{Overlap, Range};
use crate::sequence::Sequence;
use crate::sink::{DiffSink, EventType, NoopSink, Side};

/// Compares token sequences with a fixed locator strategy.
///
/// The comparator itself is stateless: every call builds and drops its own
/// locator context, so one instance can serve concurrent callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Comparator {
    strategy: Strategy,
}

impl Comparator {
    pub fn new(strategy: Strategy) -> Comparator {
        return Comparator { strategy };
    }

    pub fn strategy(&self) -> Strategy {
        return self.strategy;
    }

    /// Similarity of `a` and `b` with no sink and no minimum block size.
    pub fn compare<T: Eq + Hash>(&self, a: &Sequence<T>, b: &Sequence<T>) -> Result<f64> {
        return self.compare_with_sink(a, b, &mut NoopSink, 0);
    }

    /// Similarity of `a` and `b`, reporting every segment to `sink`.
    ///
    /// Runs shorter than `min_block_size` are treated as differences.
    pub fn compare_with_sink<T, S>(
        &self,
        a: &Sequence<T>,
        b: &Sequence<T>,
        sink: &mut S,
        min_block_size: usize,
    ) -> Result<f64>
    where
        T: Eq + Hash,
        S: DiffSink<T> + ?Sized,
    {
        tracing::debug!(strategy = %self.strategy, "selected locator");
        return match self.strategy {
            Strategy::Dense => compare_with(&Dense, a, b, sink, min_block_size),
            Strategy::Rolling => compare_with(&Rolling, a, b, sink, min_block_size),
            Strategy::Sparse => compare_with(&Sparse, a, b, sink, min_block_size),
        };
    }

    /// Like `compare_with_sink`, but returns 0 without doing any work when
    /// the inputs' lengths alone rule out reaching `min_expectation`.
    ///
    /// Neither the locator nor the sink is touched in that case.
    pub fn compare_with_expectation<T, S>(
        &self,
        min_expectation: f64,
        a: &Sequence<T>,
        b: &Sequence<T>,
        sink: &mut S,
        min_block_size: usize,
    ) -> Result<f64>
    where
        T: Eq + Hash,
        S: DiffSink<T> + ?Sized,
    {
        if !(0.0..=1.0).contains(&min_expectation) {
            return Err(Error::InvalidExpectation(min_expectation));
        }

        let ceiling = Comparator::similarity_ceiling(a.len(), b.len());
        if ceiling < min_expectation {
            tracing::debug!(ceiling, min_expectation, "similarity ceiling below expectation, skipping");
            return Ok(0.0);
        }

        return self.compare_with_sink(a, b, sink, min_block_size);
    }

    /// Length ratio `min / max` used by `compare_with_expectation`.
    ///
    /// No single run can be longer than the shorter sequence. The remainder
    /// weights can still lift a similarity slightly above this value, so it
    /// is a cheap filter rather than a strict bound. Two empty sequences
    /// have a ceiling of 0.
    pub fn similarity_ceiling(len_a: usize, len_b: usize) -> f64 {
        let longer = len_a.max(len_b);
        if longer == 0 {
            return 0.0;
        }
        return len_a.min(len_b) as f64 / longer as f64;
    }
}

/// Compare `a` and `b` with an explicit locator.
///
/// This is what `Comparator` dispatches to; it is public so that custom
/// locators can be run through the same engine.
pub fn compare_with<L, T, S>(
    locator: &L,
    a: &Sequence<T>,
    b: &Sequence<T>,
    sink: &mut S,
    min_block_size: usize,
) -> Result<f64>
where
    L: Locator,
    T: Eq + Hash,
    S: DiffSink<T> + ?Sized,
{
    tracing::debug!(
        left = a.len(),
        right = b.len(),
        left_label = a.label(),
        right_label = b.label(),
        min_block_size,
        "comparing sequences"
    );

    let mut context = locator.build_context(a, b);
    sink.on_before_start();

    let mut frames: Vec<Frame> = Vec::new();
    let mut pivots = 0usize;
    let mut deepest = 0usize;
    let mut step = Step::Enter(a.full_range(), b.full_range());

    let similarity = loop {
        step = match step {
            Step::Enter(range_a, range_b) => {
                if range_a.is_empty() || range_b.is_empty() {
                    Step::Return(0.0)
                } else {
                    let pivot = locator.find_largest_run(a, range_a, b, range_b, &mut context);

                    if !pivot.is_empty() && !pivot.is_congruent() {
                        return Err(Error::RunLengthMismatch {
                            left: pivot.a.len(),
                            right: pivot.b.len(),
                        });
                    }

                    if pivot.is_empty() || pivot.len() < min_block_size {
                        sink.handle(a, range_a, EventType::DifferentPart, Side::Left);
                        sink.handle(b, range_b, EventType::DifferentPart, Side::Right);
                        Step::Return(0.0)
                    } else {
                        tracing::trace!(left = %pivot.a, right = %pivot.b, depth = frames.len(), "pivot");
                        pivots += 1;

                        let (frame, before_a, before_b) = Frame::split(range_a, range_b, pivot)?;
                        frames.push(frame);
                        deepest = deepest.max(frames.len());
                        Step::Enter(before_a, before_b)
                    }
                }
            }
            Step::Return(value) => {
                let Some(frame) = frames.last_mut() else {
                    break value;
                };

                match frame.stage {
                    Stage::Before => {
                        frame.before_result = value;
                        frame.stage = Stage::After;
                        sink.handle(a, frame.pivot.a, EventType::CommonPart, Side::Left);
                        sink.handle(b, frame.pivot.b, EventType::CommonPart, Side::Right);
                        Step::Enter(frame.after_a, frame.after_b)
                    }
                    Stage::After => {
                        let total = frame.share
                            + frame.before_weight * frame.before_result
                            + frame.after_weight * value;
                        frames.pop();
                        Step::Return(total)
                    }
                }
            }
        };
    };

    sink.on_done(similarity);
    tracing::debug!(similarity, pivots, deepest, "comparison done");
    return Ok(similarity);
}

/// Next move of the unrolled recursion.
enum Step {
    /// Process a pair of ranges.
    Enter(Range, Range),
    /// Hand a result back to the innermost pending frame.
    Return(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Waiting for the result of the ranges before the pivot.
    Before,
    /// Waiting for the result of the ranges after the pivot.
    After,
}

/// A pivot whose surrounding ranges are still being processed.
struct Frame {
    share: f64,
    before_weight: f64,
    after_weight: f64,
    before_result: f64,
    pivot: Overlap,
    after_a: Range,
    after_b: Range,
    stage: Stage,
}

impl Frame {
    /// Split the ranges around `pivot`, returning the frame and the "before" pair.
    fn split(range_a: Range, range_b: Range, pivot: Overlap) -> Result<(Frame, Range, Range)> {
        let len_a = range_a.len() as f64;
        let len_b = range_b.len() as f64;

        let before_a = Range::new(range_a.begin(), pivot.a.begin())?;
        let before_b = Range::new(range_b.begin(), pivot.b.begin())?;
        let after_a = Range::new(pivot.a.end(), range_a.end())?;
        let after_b = Range::new(pivot.b.end(), range_b.end())?;

        // Weight each remainder by whichever side it dominates.
        let before_weight = (before_a.len() as f64 / len_a).max(before_b.len() as f64 / len_b);
        let after_weight = (after_a.len() as f64 / len_a).max(after_b.len() as f64 / len_b);

        let frame = Frame {
            share: pivot.len() as f64 / range_a.len().max(range_b.len()) as f64,
            before_weight,
            after_weight,
            before_result: 0.0,
            pivot,
            after_a,
            after_b,
            stage: Stage::Before,
        };
        return Ok((frame, before_a, before_b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DiffEvent, Transcript};

    fn words(s: &str) -> Sequence<&str> {
        return s.split_whitespace().collect();
    }

    #[test]
    fn single_substitution() {
        let a = words("a b c d");
        let b = words("a x c d");

        for strategy in Strategy::ALL {
            let mut transcript = Transcript::new();
            let similarity = Comparator::new(strategy)
                .compare_with_sink(&a, &b, &mut transcript, 0)
                .unwrap();

            assert_eq!(similarity, 0.75, "{strategy}");
            assert_eq!(
                transcript.events(),
                &[
                    DiffEvent::new(EventType::CommonPart, Side::Left, Range::at(0, 1)),
                    DiffEvent::new(EventType::CommonPart, Side::Right, Range::at(0, 1)),
                    DiffEvent::new(EventType::DifferentPart, Side::Left, Range::at(1, 1)),
                    DiffEvent::new(EventType::DifferentPart, Side::Right, Range::at(1, 1)),
                    DiffEvent::new(EventType::CommonPart, Side::Left, Range::at(2, 2)),
                    DiffEvent::new(EventType::CommonPart, Side::Right, Range::at(2, 2)),
                ]
            );
        }
    }

    #[test]
    fn empty_side_reports_nothing_between_start_and_done() {
        let a: Sequence<&str> = Sequence::new(Vec::new());
        let b = words("x y");
        let mut transcript = Transcript::new();
        let similarity = Comparator::default()
            .compare_with_sink(&a, &b, &mut transcript, 0)
            .unwrap();

        assert_eq!(similarity, 0.0);
        assert!(transcript.started());
        assert!(transcript.events().is_empty());
        assert_eq!(transcript.similarity(), Some(0.0));
    }

    #[test]
    fn min_block_size_discards_short_runs() {
        let a = words("a b c d");
        let b = words("a x c d");
        let comparator = Comparator::new(Strategy::Dense);
        let mut transcript = Transcript::new();

        let similarity = comparator.compare_with_sink(&a, &b, &mut transcript, 2).unwrap();
        // The pivot "c d" survives, the single "a" does not.
        assert_eq!(similarity, 0.5);
        assert_eq!(transcript.different_len(Side::Left), 2);

        let similarity = comparator.compare_with_sink(&a, &b, &mut NoopSink, 3).unwrap();
        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn ceiling() {
        assert_eq!(Comparator::similarity_ceiling(0, 0), 0.0);
        assert_eq!(Comparator::similarity_ceiling(0, 4), 0.0);
        assert_eq!(Comparator::similarity_ceiling(3, 4), 0.75);
        assert_eq!(Comparator::similarity_ceiling(8, 2), 0.25);
    }

    #[test]
    fn expectation_short_circuits_without_events() {
        let a = words("a b c d e f g h");
        let b = words("a b");
        let mut transcript = Transcript::new();
        let similarity = Comparator::default()
            .compare_with_expectation(0.5, &a, &b, &mut transcript, 0)
            .unwrap();

        assert_eq!(similarity, 0.0);
        assert!(!transcript.started());
        assert_eq!(transcript.similarity(), None);

        let similarity = Comparator::default()
            .compare_with_expectation(0.25, &a, &b, &mut transcript, 0)
            .unwrap();
        assert_eq!(similarity, 0.25);
        assert!(transcript.started());
    }

    #[test]
    fn expectation_out_of_bounds_is_rejected() {
        let a = words("a");
        for bad in [-0.1, 1.5, f64::NAN] {
            let result = Comparator::default().compare_with_expectation(bad, &a, &a, &mut NoopSink, 0);
            assert!(matches!(result, Err(Error::InvalidExpectation(_))));
        }
    }

    /// Reports a left side one token longer than the right.
    struct Lopsided;

    impl Locator for Lopsided {
        type Context = ();

        fn build_context<T: Eq + Hash>(&self, _: &Sequence<T>, _: &Sequence<T>) {}

        fn find_largest_run<T: Eq>(
            &self,
            _: &Sequence<T>,
            range_a: Range,
            _: &Sequence<T>,
            range_b: Range,
            _: &mut (),
        ) -> Overlap {
            return Overlap {
                a: Range::at(range_a.begin(), 2),
                b: Range::at(range_b.begin(), 1),
            };
        }
    }

    #[test]
    fn incongruent_run_aborts() {
        let a = words("a b c");
        let mut transcript = Transcript::new();
        let result = compare_with(&Lopsided, &a, &a, &mut transcript, 0);

        assert!(matches!(
            result,
            Err(Error::RunLengthMismatch { left: 2, right: 1 })
        ));
        assert_eq!(transcript.similarity(), None);
    }

    #[test]
    fn deep_alternation_does_not_overflow() {
        // Matching and non-matching tokens alternate, so every pivot is one
        // token long and the work stack grows with the input.
        let n = 6_000;
        let a: Sequence<u32> = (0..n).map(|i| if i % 2 == 0 { i } else { u32::MAX }).collect();
        let b: Sequence<u32> = (0..n).map(|i| if i % 2 == 0 { i } else { u32::MAX - 1 }).collect();

        let similarity = Comparator::new(Strategy::Sparse).compare(&a, &b).unwrap();
        assert!(similarity > 0.0 && similarity <= 1.0);
    }
}
