//! Top-two tracking for best disjoint-pair queries.

use serde::{Deserialize, Serialize};

use crate::Aggregate;

/// Largest and second-largest elements of an `i64` segment.
///
/// Duplicates at different positions count separately: `[4, 4]` has
/// `max == 4` and `second == Some(4)`. A single-element segment has no
/// second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondMax {
    pub max: i64,
    pub second: Option<i64>,
}

impl SecondMax {
    /// Sum of the two largest elements, the usual pair-query answer.
    /// `None` for single-element segments.
    pub fn pair_sum(&self) -> Option<i64> {
        self.second.map(|second| self.max + second)
    }
}

impl Aggregate for SecondMax {
    type Leaf = i64;
    type Marker = ();

    fn from_leaf(leaf: &i64) -> Self {
        SecondMax {
            max: *leaf,
            second: None,
        }
    }

    fn combine(&self, right: &Self) -> Self {
        // The loser of the two maxima is always a valid second candidate.
        let mut second = self.max.min(right.max);
        if let Some(s) = self.second {
            second = second.max(s);
        }
        if let Some(s) = right.second {
            second = second.max(s);
        }
        SecondMax {
            max: self.max.max(right.max),
            second: Some(second),
        }
    }
}
