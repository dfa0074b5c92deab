//! Fenwick (binary indexed) trees, the narrower siblings of the segment
//! tree engine.
//!
//! [`FenwickTree`] gives point-update/range-sum; [`RangeUpdateFenwickTree`]
//! reinterprets the same structure as range-update/point-query by recording
//! each bulk add as two boundary deltas. Both accumulate in `i64` and, like
//! the sum aggregate, assume `n * max|element|` stays within `i64` range.
//!
//! Out-of-range indices and ranges are rejected with
//! [`TreeError::InvalidRange`].

use std::ops::Range;

use rangekit_aggregate::TreeError;

/// Point-update/range-sum Fenwick tree over `i64`.
///
/// Internally one-based: `tree[i]` holds the sum of the `i & -i` elements
/// ending at position `i`.
#[derive(Debug, Clone)]
pub struct FenwickTree {
    tree: Vec<i64>,
    len: usize,
}

impl FenwickTree {
    /// Creates an all-zero tree over `len` elements.
    pub fn new(len: usize) -> Self {
        FenwickTree {
            tree: vec![0; len + 1],
            len,
        }
    }

    /// Builds from a slice in O(n): seed each slot, then fold every slot
    /// into its next-larger cover.
    pub fn from_slice(values: &[i64]) -> Self {
        let len = values.len();
        let mut fenwick = FenwickTree::new(len);
        for (i, &value) in values.iter().enumerate() {
            fenwick.tree[i + 1] = value;
        }
        for i in 1..=len {
            let j = i + (i & i.wrapping_neg());
            if j <= len {
                fenwick.tree[j] += fenwick.tree[i];
            }
        }
        fenwick
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree covers no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `delta` to the element at `index`.
    pub fn add(&mut self, index: usize, delta: i64) -> Result<(), TreeError> {
        if index >= self.len {
            return Err(TreeError::InvalidRange {
                start: index,
                end: index.wrapping_add(1),
                len: self.len,
            });
        }
        let mut i = index + 1;
        while i <= self.len {
            self.tree[i] += delta;
            i += i & i.wrapping_neg();
        }
        Ok(())
    }

    /// Sum of the first `end` elements, `0..end`. `prefix_sum(0)` is zero.
    pub fn prefix_sum(&self, end: usize) -> Result<i64, TreeError> {
        if end > self.len {
            return Err(TreeError::InvalidRange {
                start: 0,
                end,
                len: self.len,
            });
        }
        let mut total = 0;
        let mut i = end;
        while i > 0 {
            total += self.tree[i];
            i -= i & i.wrapping_neg();
        }
        Ok(total)
    }

    /// Sum of the elements in `range` (half-open, non-empty).
    pub fn range_sum(&self, range: Range<usize>) -> Result<i64, TreeError> {
        if range.start >= range.end || range.end > self.len {
            return Err(TreeError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.len,
            });
        }
        Ok(self.prefix_sum(range.end)? - self.prefix_sum(range.start)?)
    }
}

/// Range-update/point-query Fenwick tree over `i64`.
///
/// A bulk add over `[start, end)` becomes `+delta` at `start` and `-delta`
/// at `end`; the value at an index is then a prefix sum of the recorded
/// deltas.
#[derive(Debug, Clone)]
pub struct RangeUpdateFenwickTree {
    deltas: FenwickTree,
}

impl RangeUpdateFenwickTree {
    /// Creates an all-zero tree over `len` elements.
    pub fn new(len: usize) -> Self {
        RangeUpdateFenwickTree {
            deltas: FenwickTree::new(len),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// True when the tree covers no elements.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Adds `delta` to every element in `range` (half-open, non-empty).
    pub fn add(&mut self, range: Range<usize>, delta: i64) -> Result<(), TreeError> {
        if range.start >= range.end || range.end > self.len() {
            return Err(TreeError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.len(),
            });
        }
        self.deltas.add(range.start, delta)?;
        if range.end < self.len() {
            self.deltas.add(range.end, -delta)?;
        }
        Ok(())
    }

    /// Current value of the element at `index`.
    pub fn get(&self, index: usize) -> Result<i64, TreeError> {
        if index >= self.len() {
            return Err(TreeError::InvalidRange {
                start: index,
                end: index.wrapping_add(1),
                len: self.len(),
            });
        }
        self.deltas.prefix_sum(index + 1)
    }
}
