//! Sparse locator: only the non-zero cells of the run table.
//!
//! Each row keeps `(j, run)` pairs sorted by column. Building the rows goes
//! through a hash index of the right sequence's token positions, so the cost
//! is proportional to the number of matching pairs rather than `|a| * |b|`.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::{BestRun, Locator};
use crate::primitives::{Overlap, Range};
use crate::sequence::Sequence;

#[derive(Clone, Copy, Debug, Default)]
pub struct Sparse;

/// Non-zero `(column, run)` cells of one row, ascending by column.
type Row = SmallVec<[(usize, u32); 4]>;

/// Rows `0..=|a|` of non-zero run lengths.
#[derive(Clone, Debug)]
pub struct SparseRows {
    rows: Vec<Row>,
}

impl SparseRows {
    /// Run length at `(i, j)`, zero when the cell is not stored.
    ///
    /// Panics when `i > |a|`, like slice indexing.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        let row = &self.rows[i];
        return match row.binary_search_by_key(&j, |&(column, _)| column) {
            Ok(found) => row[found].1,
            Err(_) => 0,
        };
    }

    /// Total number of stored cells.
    pub fn entry_count(&self) -> usize {
        return self.rows.iter().map(|row| row.len()).sum();
    }
}

impl Locator for Sparse {
    type Context = SparseRows;

    fn build_context<T: Eq + Hash>(&self, a: &Sequence<T>, b: &Sequence<T>) -> SparseRows {
        // 1-based columns at which each token occurs in b, ascending.
        let mut columns: FxHashMap<&T, SmallVec<[usize; 4]>> = FxHashMap::default();
        for (index, token) in b.tokens().iter().enumerate() {
            columns.entry(token).or_default().push(index + 1);
        }

        let mut rows: Vec<Row> = Vec::with_capacity(a.len() + 1);
        rows.push(Row::new());

        for i in 1..=a.len() {
            let mut row = Row::new();

            if let Some(matches) = columns.get(a.item(i - 1)) {
                let prev = &rows[i - 1];
                let mut cursor = 0;

                for &j in matches {
                    let run = if i == 1 || j == 1 {
                        1
                    } else {
                        // Columns only grow, so the cursor into the previous row never rewinds.
                        while cursor < prev.len() && prev[cursor].0 < j - 1 {
                            cursor += 1;
                        }
                        match prev.get(cursor) {
                            Some(&(column, run)) if column == j - 1 => run + 1,
                            _ => 1,
                        }
                    };
                    row.push((j, run));
                }
            }

            rows.push(row);
        }

        let context = SparseRows { rows };
        tracing::trace!(
            entries = context.entry_count(),
            distinct_tokens = columns.len(),
            "built sparse run rows"
        );
        return context;
    }

    fn find_largest_run<T: Eq>(
        &self,
        _a: &Sequence<T>,
        range_a: Range,
        _b: &Sequence<T>,
        range_b: Range,
        context: &mut SparseRows,
    ) -> Overlap {
        let mut best = BestRun::default();
        let first_column = range_b.begin() + 1;

        for i in range_a.begin() + 1..=range_a.end() {
            let row = &context.rows[i];
            if row.is_empty() {
                continue;
            }
            let max_a = i - range_a.begin();
            let start = row.partition_point(|&(column, _)| column < first_column);

            for &(j, run) in &row[start..] {
                if j > range_b.end() {
                    break;
                }
                let max_b = j - range_b.begin();
                best.offer(i, j, (run as usize).min(max_a).min(max_b));
            }
        }

        return best.into_overlap();
    }
}
