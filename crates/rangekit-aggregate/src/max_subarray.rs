//! Maximum-subarray-sum summary.

use serde::{Deserialize, Serialize};

use crate::Aggregate;

/// Best non-empty subarray sum of an `i64` segment, with the prefix and
/// suffix bookkeeping the combine rule needs.
///
/// Prefixes and suffixes are non-empty, so an all-negative segment reports
/// its largest single element rather than an empty-sum zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxSubarraySum {
    /// Total of the whole segment.
    pub total: i64,
    /// Best non-empty subarray sum within the segment.
    pub best: i64,
    /// Best sum of a non-empty prefix.
    pub best_prefix: i64,
    /// Best sum of a non-empty suffix.
    pub best_suffix: i64,
}

impl Aggregate for MaxSubarraySum {
    type Leaf = i64;
    type Marker = ();

    fn from_leaf(leaf: &i64) -> Self {
        let value = *leaf;
        MaxSubarraySum {
            total: value,
            best: value,
            best_prefix: value,
            best_suffix: value,
        }
    }

    fn combine(&self, right: &Self) -> Self {
        MaxSubarraySum {
            total: self.total + right.total,
            // The best subarray sits inside one side or straddles the
            // boundary as left-suffix plus right-prefix.
            best: (self.best_suffix + right.best_prefix).max(self.best.max(right.best)),
            best_prefix: self.best_prefix.max(self.total + right.best_prefix),
            best_suffix: right.best_suffix.max(right.total + self.best_suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(values: &[i64]) -> MaxSubarraySum {
        let mut aggregates = values.iter().map(MaxSubarraySum::from_leaf);
        let first = aggregates.next().unwrap();
        aggregates.fold(first, |acc, next| acc.combine(&next))
    }

    #[test]
    fn test_leaf_seeds_all_fields() {
        let leaf = MaxSubarraySum::from_leaf(&-3);
        assert_eq!(leaf.total, -3);
        assert_eq!(leaf.best, -3);
        assert_eq!(leaf.best_prefix, -3);
        assert_eq!(leaf.best_suffix, -3);
    }

    #[test]
    fn test_combine_crossing_subarray() {
        // Best subarray 2, -1, 3 crosses every split point.
        let agg = fold(&[2, -1, 3]);
        assert_eq!(agg.best, 4);
        assert_eq!(agg.total, 4);
        assert_eq!(agg.best_prefix, 4);
        assert_eq!(agg.best_suffix, 3);
    }

    #[test]
    fn test_all_negative_picks_single_element() {
        let agg = fold(&[-5, -2, -8]);
        assert_eq!(agg.best, -2);
        assert_eq!(agg.best_prefix, -5);
        assert_eq!(agg.best_suffix, -8);
    }

    #[test]
    fn test_interior_best() {
        let agg = fold(&[-4, 6, 7, -10, 2]);
        assert_eq!(agg.best, 13);
    }
}
