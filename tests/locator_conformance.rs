//! Conformance test suite for largest-run locators.
//!
//! All implementations of the `Locator` trait must pass these tests. They
//! check:
//!
//! 1. Basic runs: identical, disjoint, empty queries
//! 2. Clipping of runs to the queried sub-ranges
//! 3. The shared tie-break: lowest end in `a`, then lowest end in `b`
//! 4. Reuse of one context across many queries
//!
//! To test a new locator, add it to the `run_conformance_tests!` calls at
//! the bottom of this file.

use runsplit::locate::{Dense, Rolling, Sparse};
use runsplit::{Locator, Overlap, Range, Sequence};

fn chars(s: &str) -> Sequence<char> {
    return s.chars().collect();
}

fn range(begin: usize, end: usize) -> Range {
    return Range::new(begin, end).unwrap();
}

fn find_full<L: Locator>(locator: &L, a: &Sequence<char>, b: &Sequence<char>) -> Overlap {
    let mut context = locator.build_context(a, b);
    return locator.find_largest_run(a, a.full_range(), b, b.full_range(), &mut context);
}

// =============================================================================
// Basic runs
// =============================================================================

/// Identical sequences match as one run covering everything.
pub fn test_identical<L: Locator>(locator: L) {
    let a = chars("hello world");
    let run = find_full(&locator, &a, &a);
    assert_eq!(run.a, a.full_range());
    assert_eq!(run.b, a.full_range());
}

/// No shared token gives an empty overlap.
pub fn test_disjoint<L: Locator>(locator: L) {
    let run = find_full(&locator, &chars("abc"), &chars("xyz"));
    assert_eq!(run, Overlap::none());
}

/// Empty query ranges give an empty overlap.
pub fn test_empty_queries<L: Locator>(locator: L) {
    let a = chars("abc");
    let b = chars("abc");
    let mut context = locator.build_context(&a, &b);

    let run = locator.find_largest_run(&a, range(1, 1), &b, b.full_range(), &mut context);
    assert!(run.is_empty());
    let run = locator.find_largest_run(&a, a.full_range(), &b, range(3, 3), &mut context);
    assert!(run.is_empty());
}

/// Empty sequences build a usable context.
pub fn test_empty_sequences<L: Locator>(locator: L) {
    let empty = chars("");
    let other = chars("ab");
    assert!(find_full(&locator, &empty, &other).is_empty());
    assert!(find_full(&locator, &other, &empty).is_empty());
    assert!(find_full(&locator, &empty, &empty).is_empty());
}

/// A run in the middle of both sequences.
pub fn test_inner_run<L: Locator>(locator: L) {
    let run = find_full(&locator, &chars("xxabcdyy"), &chars("zabcdz"));
    assert_eq!(run.a, range(2, 6));
    assert_eq!(run.b, range(1, 5));
    assert!(run.is_congruent());
}

// =============================================================================
// Clipping
// =============================================================================

/// A query starting inside a run only sees the run's tail.
pub fn test_clip_at_query_start<L: Locator>(locator: L) {
    let a = chars("abcdef");
    let b = chars("abcdef");
    let mut context = locator.build_context(&a, &b);

    let run = locator.find_largest_run(&a, range(2, 6), &b, range(0, 6), &mut context);
    assert_eq!(run.a, range(2, 6));
    assert_eq!(run.b, range(2, 6));

    let run = locator.find_largest_run(&a, range(0, 6), &b, range(4, 6), &mut context);
    assert_eq!(run.a, range(4, 6));
    assert_eq!(run.b, range(4, 6));
}

/// A query ending inside a run only sees the run's head.
pub fn test_clip_at_query_end<L: Locator>(locator: L) {
    let a = chars("abcdef");
    let b = chars("xabcdef");
    let mut context = locator.build_context(&a, &b);

    let run = locator.find_largest_run(&a, range(0, 3), &b, b.full_range(), &mut context);
    assert_eq!(run.a, range(0, 3));
    assert_eq!(run.b, range(1, 4));
}

/// The clip uses whichever side's query starts later in the run.
pub fn test_clip_uses_tighter_side<L: Locator>(locator: L) {
    let a = chars("abcdef");
    let b = chars("abcdef");
    let mut context = locator.build_context(&a, &b);

    let run = locator.find_largest_run(&a, range(1, 6), &b, range(3, 6), &mut context);
    assert_eq!(run.a, range(3, 6));
    assert_eq!(run.b, range(3, 6));
}

// =============================================================================
// Tie-break
// =============================================================================

/// Equal runs: the one ending first in `a` wins, even if it ends later in `b`.
pub fn test_tie_lowest_end_in_a<L: Locator>(locator: L) {
    let run = find_full(&locator, &chars("abxcd"), &chars("cdyab"));
    assert_eq!(run.a, range(0, 2));
    assert_eq!(run.b, range(3, 5));
}

/// Same end in `a`: the one ending first in `b` wins.
pub fn test_tie_lowest_end_in_b<L: Locator>(locator: L) {
    let run = find_full(&locator, &chars("ab"), &chars("abzab"));
    assert_eq!(run.a, range(0, 2));
    assert_eq!(run.b, range(0, 2));
}

/// Repeated tokens: the earliest maximal run wins.
pub fn test_repeated_tokens<L: Locator>(locator: L) {
    let run = find_full(&locator, &chars("aaaa"), &chars("aa"));
    assert_eq!(run.a, range(0, 2));
    assert_eq!(run.b, range(0, 2));
}

/// A strictly longer later run replaces an earlier shorter one.
pub fn test_longer_later_run_wins<L: Locator>(locator: L) {
    let run = find_full(&locator, &chars("ab_abc"), &chars("abc"));
    assert_eq!(run.a, range(3, 6));
    assert_eq!(run.b, range(0, 3));
}

// =============================================================================
// Context reuse
// =============================================================================

/// Every sub-rectangle query matches the brute-force reference.
pub fn test_all_subranges_match_reference<L: Locator>(locator: L) {
    let a = chars("abracadabra");
    let b = chars("cadabrabra");
    let mut context = locator.build_context(&a, &b);

    for a_lo in 0..=a.len() {
        for a_hi in a_lo..=a.len() {
            for b_lo in 0..=b.len() {
                for b_hi in b_lo..=b.len() {
                    let run = locator.find_largest_run(
                        &a,
                        range(a_lo, a_hi),
                        &b,
                        range(b_lo, b_hi),
                        &mut context,
                    );
                    let (len, end_a, end_b) = runsplit_reference::largest_run(
                        a.tokens(),
                        (a_lo, a_hi),
                        b.tokens(),
                        (b_lo, b_hi),
                    );
                    let expected = if len == 0 {
                        Overlap::none()
                    } else {
                        Overlap::ending_at(end_a, end_b, len)
                    };
                    assert_eq!(run, expected, "a[{a_lo}..{a_hi}] b[{b_lo}..{b_hi}]");
                }
            }
        }
    }
}

// =============================================================================
// Test macro
// =============================================================================

macro_rules! run_conformance_tests {
    ($name:ident, $make:expr) => {
        mod $name {
            use super::*;

            #[test]
            fn identical() {
                test_identical($make);
            }

            #[test]
            fn disjoint() {
                test_disjoint($make);
            }

            #[test]
            fn empty_queries() {
                test_empty_queries($make);
            }

            #[test]
            fn empty_sequences() {
                test_empty_sequences($make);
            }

            #[test]
            fn inner_run() {
                test_inner_run($make);
            }

            #[test]
            fn clip_at_query_start() {
                test_clip_at_query_start($make);
            }

            #[test]
            fn clip_at_query_end() {
                test_clip_at_query_end($make);
            }

            #[test]
            fn clip_uses_tighter_side() {
                test_clip_uses_tighter_side($make);
            }

            #[test]
            fn tie_lowest_end_in_a() {
                test_tie_lowest_end_in_a($make);
            }

            #[test]
            fn tie_lowest_end_in_b() {
                test_tie_lowest_end_in_b($make);
            }

            #[test]
            fn repeated_tokens() {
                test_repeated_tokens($make);
            }

            #[test]
            fn longer_later_run_wins() {
                test_longer_later_run_wins($make);
            }

            #[test]
            fn all_subranges_match_reference() {
                test_all_subranges_match_reference($make);
            }
        }
    };
}

run_conformance_tests!(dense, Dense);
run_conformance_tests!(rolling, Rolling);
run_conformance_tests!(sparse, Sparse);
