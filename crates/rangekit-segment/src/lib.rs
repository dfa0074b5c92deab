//! Flat-array segment addressing for rangekit interval trees.
//!
//! Maps array index ranges onto nodes of an implicit binary tree stored in a
//! flat array: node `i`'s children live at `2i + 1` and `2i + 2`, and a tree
//! over `n` leaves needs `2 * nextPow2(n) - 1` slots.

use serde::{Deserialize, Serialize};

/// Index of the root node in the flat tree array.
pub const ROOT: usize = 0;

/// Index of the left child of the node at `index`.
#[inline]
pub const fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of the node at `index`.
#[inline]
pub const fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Number of flat-array slots needed for a tree over `leaf_count` leaves.
///
/// Zero leaves need zero slots; otherwise twice the next power of two at or
/// above `leaf_count`, minus one.
pub const fn tree_capacity(leaf_count: usize) -> usize {
    if leaf_count == 0 {
        0
    } else {
        2 * leaf_count.next_power_of_two() - 1
    }
}

/// A closed, 0-indexed range `[lo, hi]` of array positions covered by one
/// tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    lo: usize,
    hi: usize,
}

impl Segment {
    /// Creates the segment `[lo, hi]`. `lo` must not exceed `hi`.
    pub fn new(lo: usize, hi: usize) -> Self {
        debug_assert!(lo <= hi, "segment bounds out of order");
        Self { lo, hi }
    }

    /// First covered position.
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// Last covered position.
    pub fn hi(&self) -> usize {
        self.hi
    }

    /// Number of covered positions. Never zero.
    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    /// True when the segment covers a single position.
    pub fn is_unit(&self) -> bool {
        self.lo == self.hi
    }

    /// Midpoint of the halving rule: the left child ends here.
    pub fn mid(&self) -> usize {
        self.lo + (self.hi - self.lo) / 2
    }

    /// Splits into the `[lo, mid]` and `[mid + 1, hi]` child segments.
    ///
    /// Must not be called on unit segments.
    pub fn split(&self) -> (Segment, Segment) {
        let mid = self.mid();
        (Segment::new(self.lo, mid), Segment::new(mid + 1, self.hi))
    }

    /// True when `index` falls inside the segment.
    pub fn contains(&self, index: usize) -> bool {
        self.lo <= index && index <= self.hi
    }

    /// True when `outer` covers every position of `self`.
    pub fn covered_by(&self, outer: Segment) -> bool {
        outer.lo <= self.lo && self.hi <= outer.hi
    }

    /// Classifies how `query` overlaps this node's segment.
    ///
    /// `query` must intersect the segment; callers guarantee this by only
    /// descending into halves the range actually touches.
    pub fn classify(&self, query: Segment) -> Overlap {
        if self.covered_by(query) {
            return Overlap::Total;
        }
        let mid = self.mid();
        match (query.lo <= mid, query.hi > mid) {
            (true, true) => Overlap::BothHalves,
            (true, false) => Overlap::LeftHalf,
            (false, _) => Overlap::RightHalf,
        }
    }
}

/// How a query or update range overlaps a node's segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlap {
    /// The range covers the whole segment.
    Total,
    /// Only the left half intersects the range.
    LeftHalf,
    /// Only the right half intersects the range.
    RightHalf,
    /// Both halves intersect the range.
    BothHalves,
}
