//! Rolling locator: two recycled rows, no precomputed table.
//!
//! Every query reruns the recurrence over just its own sub-rectangle. Memory
//! stays at two rows of width `|b|`; the price is that cells shared by
//! several queries are recomputed each time.

use std::hash::Hash;

use super::{BestRun, Locator};
use crate::primitives::{Overlap, Range};
use crate::sequence::Sequence;

#[derive(Clone, Copy, Debug, Default)]
pub struct Rolling;

/// The previous and current rows of the recurrence.
#[derive(Clone, Debug)]
pub struct RollingRows {
    prev: Vec<u32>,
    curr: Vec<u32>,
}

impl RollingRows {
    pub fn width(&self) -> usize {
        return self.prev.len();
    }
}

impl Locator for Rolling {
    type Context = RollingRows;

    fn build_context<T: Eq + Hash>(&self, _a: &Sequence<T>, b: &Sequence<T>) -> RollingRows {
        return RollingRows {
            prev: vec![0; b.len()],
            curr: vec![0; b.len()],
        };
    }

    fn find_largest_run<T: Eq>(
        &self,
        a: &Sequence<T>,
        range_a: Range,
        b: &Sequence<T>,
        range_b: Range,
        rows: &mut RollingRows,
    ) -> Overlap {
        let mut best = BestRun::default();
        let len_b = range_b.len();

        for i in 0..range_a.len() {
            let index_a = range_a.begin() + i;
            let token = a.item(index_a);

            for j in 0..len_b {
                let index_b = range_b.begin() + j;
                // Restarting at the query edges clips runs to the sub-rectangle.
                let run = if token != b.item(index_b) {
                    0
                } else if i == 0 || j == 0 {
                    1
                } else {
                    rows.prev[j - 1] + 1
                };
                rows.curr[j] = run;
                best.offer(index_a + 1, index_b + 1, run as usize);
            }

            std::mem::swap(&mut rows.prev, &mut rows.curr);
        }

        return best.into_overlap();
    }
}
