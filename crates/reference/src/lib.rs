//! Naive reference implementation of recursive longest-run similarity.
//!
//! Everything here is written for obviousness, not speed:
//!
//! - the largest run is found by brute force, walking backwards from every
//!   candidate end position
//! - the splitting recursion is plain function recursion
//!
//! It exists to be compared against the optimized engine in tests. Both
//! must agree exactly, including the transcript and the tie-break (first
//! maximal run by end position in `a`, then in `b`).

/// One reported segment, as half-open indices into its sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub common: bool,
    pub left: bool,
    pub begin: usize,
    pub end: usize,
}

/// Length and end positions of the largest run in `a[a_lo..a_hi]` x `b[b_lo..b_hi]`.
///
/// Returns `(len, end_a, end_b)`; `len == 0` when nothing matches.
pub fn largest_run<T: PartialEq>(
    a: &[T],
    (a_lo, a_hi): (usize, usize),
    b: &[T],
    (b_lo, b_hi): (usize, usize),
) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    for i in a_lo + 1..=a_hi {
        for j in b_lo + 1..=b_hi {
            let mut len = 0;
            while i - len > a_lo && j - len > b_lo && a[i - len - 1] == b[j - len - 1] {
                len += 1;
            }
            if len > best.0 {
                best = (len, i, j);
            }
        }
    }
    return best;
}

/// Similarity of `a` and `b` plus the in-order list of reported segments.
pub fn compare<T: PartialEq>(a: &[T], b: &[T], min_block_size: usize) -> (f64, Vec<Segment>) {
    let mut segments = Vec::new();
    let similarity = split(a, (0, a.len()), b, (0, b.len()), min_block_size, &mut segments);
    return (similarity, segments);
}

fn split<T: PartialEq>(
    a: &[T],
    ra: (usize, usize),
    b: &[T],
    rb: (usize, usize),
    min_block_size: usize,
    out: &mut Vec<Segment>,
) -> f64 {
    let len_a = ra.1 - ra.0;
    let len_b = rb.1 - rb.0;
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let (len, end_a, end_b) = largest_run(a, ra, b, rb);
    if len == 0 || len < min_block_size {
        out.push(Segment { common: false, left: true, begin: ra.0, end: ra.1 });
        out.push(Segment { common: false, left: false, begin: rb.0, end: rb.1 });
        return 0.0;
    }

    let before_a = (ra.0, end_a - len);
    let before_b = (rb.0, end_b - len);
    let after_a = (end_a, ra.1);
    let after_b = (end_b, rb.1);

    let share = len as f64 / len_a.max(len_b) as f64;
    let before_weight = ((before_a.1 - before_a.0) as f64 / len_a as f64)
        .max((before_b.1 - before_b.0) as f64 / len_b as f64);
    let after_weight = ((after_a.1 - after_a.0) as f64 / len_a as f64)
        .max((after_b.1 - after_b.0) as f64 / len_b as f64);

    let before = split(a, before_a, b, before_b, min_block_size, out);
    out.push(Segment { common: true, left: true, begin: end_a - len, end: end_a });
    out.push(Segment { common: true, left: false, begin: end_b - len, end: end_b });
    let after = split(a, after_a, b, after_b, min_block_size, out);

    return share + before_weight * before + after_weight * after;
}
