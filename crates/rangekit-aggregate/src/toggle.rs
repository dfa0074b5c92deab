//! Lit-count summary with lazy range toggling.

use serde::{Deserialize, Serialize};

use crate::{Aggregate, TreeError};

/// Count of switched-on positions in a boolean segment.
///
/// The bulk marker is a parity bit: `true` toggles every position, and an
/// odd number of pending toggles turns the count into `len - lit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitCount {
    /// Number of positions currently on.
    pub lit: usize,
}

impl Aggregate for LitCount {
    type Leaf = bool;
    type Marker = bool;

    const RANGE_UPDATES: bool = true;

    fn from_leaf(leaf: &bool) -> Self {
        LitCount {
            lit: usize::from(*leaf),
        }
    }

    fn combine(&self, right: &Self) -> Self {
        LitCount {
            lit: self.lit + right.lit,
        }
    }

    fn apply(&mut self, toggle: &bool, segment_len: usize) -> Result<(), TreeError> {
        if *toggle {
            self.lit = segment_len - self.lit;
        }
        Ok(())
    }

    fn compose(prev: &mut bool, next: &bool) -> Result<(), TreeError> {
        // Two toggles cancel.
        *prev ^= *next;
        Ok(())
    }
}
