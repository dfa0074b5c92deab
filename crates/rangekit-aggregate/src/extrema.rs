//! Minimum and maximum summaries. Point updates only.

use serde::{Deserialize, Serialize};

use crate::Aggregate;

/// Smallest element of an `i64` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Min {
    pub value: i64,
}

impl Aggregate for Min {
    type Leaf = i64;
    type Marker = ();

    fn from_leaf(leaf: &i64) -> Self {
        Min { value: *leaf }
    }

    fn combine(&self, right: &Self) -> Self {
        Min {
            value: self.value.min(right.value),
        }
    }
}

/// Largest element of an `i64` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Max {
    pub value: i64,
}

impl Aggregate for Max {
    type Leaf = i64;
    type Marker = ();

    fn from_leaf(leaf: &i64) -> Self {
        Max { value: *leaf }
    }

    fn combine(&self, right: &Self) -> Self {
        Max {
            value: self.value.max(right.value),
        }
    }
}
