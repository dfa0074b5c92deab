//! Longest-run tracking for repeated values.

use serde::{Deserialize, Serialize};

use crate::Aggregate;

/// A run of one repeated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub value: i64,
    pub count: usize,
}

/// Longest run of a repeated value in an `i64` segment.
///
/// Tracks the best run overall plus the runs touching each edge, which is
/// what lets two adjacent summaries merge across their shared boundary.
/// When two runs tie for longest, which one `best` reports depends on fold
/// order; the count never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestRun {
    /// Number of elements in the segment.
    pub len: usize,
    /// Longest run anywhere in the segment.
    pub best: Run,
    /// Run touching the left edge.
    pub prefix: Run,
    /// Run touching the right edge.
    pub suffix: Run,
}

impl Aggregate for LongestRun {
    type Leaf = i64;
    type Marker = ();

    fn from_leaf(leaf: &i64) -> Self {
        let run = Run {
            value: *leaf,
            count: 1,
        };
        LongestRun {
            len: 1,
            best: run,
            prefix: run,
            suffix: run,
        }
    }

    fn combine(&self, right: &Self) -> Self {
        let mut best = if right.best.count > self.best.count {
            right.best
        } else {
            self.best
        };
        if self.suffix.value == right.prefix.value {
            let merged = Run {
                value: self.suffix.value,
                count: self.suffix.count + right.prefix.count,
            };
            if merged.count > best.count {
                best = merged;
            }
        }

        // An edge run crosses the boundary only when it spans its whole
        // side.
        let prefix = if self.prefix.count == self.len && self.prefix.value == right.prefix.value {
            Run {
                value: self.prefix.value,
                count: self.len + right.prefix.count,
            }
        } else {
            self.prefix
        };
        let suffix = if right.suffix.count == right.len && right.suffix.value == self.suffix.value {
            Run {
                value: right.suffix.value,
                count: right.len + self.suffix.count,
            }
        } else {
            right.suffix
        };

        LongestRun {
            len: self.len + right.len,
            best,
            prefix,
            suffix,
        }
    }
}
