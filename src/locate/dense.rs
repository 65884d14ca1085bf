//! Dense locator: one full table of run lengths per comparison.

use std::hash::Hash;

use super::{BestRun, Locator};
use crate::primitives::{Overlap, Range};
use crate::sequence::Sequence;

/// Precomputes `run(i, j)` for every cell, then scans sub-rectangles of it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dense;

/// Row-major `(|a| + 1) x (|b| + 1)` table of run lengths.
///
/// Row 0 and column 0 stay zero.
#[derive(Clone, Debug)]
pub struct DenseTable {
    width: usize,
    cells: Vec<u32>,
}

impl DenseTable {
    /// Run length at `(i, j)`.
    ///
    /// Panics when `i > |a|` or `j > |b|`, like slice indexing.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        let row = &self.cells[i * self.width..(i + 1) * self.width];
        return row[j];
    }

    /// Number of allocated cells.
    pub fn cell_count(&self) -> usize {
        return self.cells.len();
    }
}

impl Locator for Dense {
    type Context = DenseTable;

    fn build_context<T: Eq + Hash>(&self, a: &Sequence<T>, b: &Sequence<T>) -> DenseTable {
        let width = b.len() + 1;
        let mut cells = vec![0u32; (a.len() + 1) * width];

        for i in 1..=a.len() {
            let token = a.item(i - 1);
            for j in 1..=b.len() {
                if token != b.item(j - 1) {
                    continue;
                }
                cells[i * width + j] = if i == 1 || j == 1 {
                    1
                } else {
                    cells[(i - 1) * width + (j - 1)] + 1
                };
            }
        }

        tracing::trace!(cells = cells.len(), "built dense run table");
        return DenseTable { width, cells };
    }

    fn find_largest_run<T: Eq>(
        &self,
        _a: &Sequence<T>,
        range_a: Range,
        _b: &Sequence<T>,
        range_b: Range,
        table: &mut DenseTable,
    ) -> Overlap {
        let mut best = BestRun::default();

        for i in range_a.begin() + 1..=range_a.end() {
            let max_a = i - range_a.begin();
            let row = &table.cells[i * table.width..(i + 1) * table.width];

            for j in range_b.begin() + 1..=range_b.end() {
                let run = row[j] as usize;
                if run == 0 {
                    continue;
                }
                let max_b = j - range_b.begin();
                best.offer(i, j, run.min(max_a).min(max_b));
            }
        }

        return best.into_overlap();
    }
}
