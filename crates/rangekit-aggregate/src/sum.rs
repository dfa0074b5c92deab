//! Running-total summary with lazy range addition.

use serde::{Deserialize, Serialize};

use crate::{Aggregate, TreeError};

/// Running total of an `i64` segment.
///
/// Accumulates in `i64`: callers must keep `n * max|element|` within `i64`
/// range for `combine` to be exact, the same widening the 32-bit element
/// workloads need. The lazy path (`delta * len` application, marker
/// composition) uses checked arithmetic and reports
/// [`TreeError::Overflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sum {
    /// Total of every element in the segment.
    pub total: i64,
}

impl Aggregate for Sum {
    type Leaf = i64;
    type Marker = i64;

    const RANGE_UPDATES: bool = true;

    fn from_leaf(leaf: &i64) -> Self {
        Sum { total: *leaf }
    }

    fn combine(&self, right: &Self) -> Self {
        Sum {
            total: self.total + right.total,
        }
    }

    fn apply(&mut self, delta: &i64, segment_len: usize) -> Result<(), TreeError> {
        let len = i64::try_from(segment_len).map_err(|_| TreeError::Overflow("segment length"))?;
        let bulk = delta
            .checked_mul(len)
            .ok_or(TreeError::Overflow("range-add application"))?;
        self.total = self
            .total
            .checked_add(bulk)
            .ok_or(TreeError::Overflow("sum accumulator"))?;
        Ok(())
    }

    fn compose(prev: &mut i64, next: &i64) -> Result<(), TreeError> {
        *prev = prev
            .checked_add(*next)
            .ok_or(TreeError::Overflow("marker composition"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_totals() {
        let left = Sum::from_leaf(&3);
        let right = Sum::from_leaf(&-5);
        assert_eq!(left.combine(&right).total, -2);
    }

    #[test]
    fn test_apply_scales_by_segment_len() {
        let mut sum = Sum { total: 10 };
        sum.apply(&4, 5).unwrap();
        assert_eq!(sum.total, 30);
    }

    #[test]
    fn test_apply_overflow() {
        let mut sum = Sum { total: 0 };
        let err = sum.apply(&i64::MAX, 2).unwrap_err();
        assert_eq!(err, TreeError::Overflow("range-add application"));
    }

    #[test]
    fn test_accumulator_overflow() {
        let mut sum = Sum { total: i64::MAX };
        let err = sum.apply(&1, 1).unwrap_err();
        assert_eq!(err, TreeError::Overflow("sum accumulator"));
    }

    #[test]
    fn test_compose_adds_deltas() {
        let mut pending = 7i64;
        Sum::compose(&mut pending, &-2).unwrap();
        assert_eq!(pending, 5);
    }

    #[test]
    fn test_compose_overflow() {
        let mut pending = i64::MAX;
        assert!(Sum::compose(&mut pending, &1).is_err());
    }
}
