//! Aggregate contract and plug-in summaries for rangekit interval trees.
//!
//! An [`Aggregate`] is the reduced information a tree node stores about its
//! segment: enough to answer a query restricted to exactly that segment, and
//! to be combined with an adjacent sibling's summary into the parent's
//! summary without re-reading the source array. Lazy-capable aggregates
//! additionally define a closed-form bulk application and marker
//! composition.
//!
//! Numeric plug-ins accumulate in `i64` and assume `n * max|element|` stays
//! within `i64` range; the lazy sum path checks its arithmetic and surfaces
//! [`TreeError::Overflow`] instead of wrapping.

pub mod brackets;
pub mod extrema;
pub mod max_subarray;
pub mod runs;
pub mod second_max;
pub mod sum;
pub mod toggle;

pub use brackets::{Bracket, BracketBalance};
pub use extrema::{Max, Min};
pub use max_subarray::MaxSubarraySum;
pub use runs::{LongestRun, Run};
pub use second_max::SecondMax;
pub use sum::Sum;
pub use toggle::LitCount;

use std::fmt::Debug;

use thiserror::Error;

/// Errors surfaced by rangekit trees and aggregate operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The range is empty or reaches past the end of the tree.
    #[error("Invalid range {start}..{end} for tree of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
    /// Checked arithmetic failed while applying or composing a bulk update.
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),
    /// A range update was requested on an aggregate without bulk-update
    /// support.
    #[error("Range updates are not supported by {aggregate}")]
    UnsupportedOperation { aggregate: &'static str },
}

/// Per-segment summary stored at every node of an interval tree.
///
/// The closure property is the central contract: [`Aggregate::combine`] must
/// produce the summary of the union of two adjacent segments from the
/// children's summaries alone. `combine` is associative but not necessarily
/// commutative (bracket balance and run tracking depend on argument order),
/// so callers always pass the summary of the left segment as `self`.
pub trait Aggregate: Clone + Debug {
    /// Source element type a leaf summary is seeded from.
    type Leaf: Clone;

    /// Pending bulk-update marker. `()` for aggregates without range
    /// updates.
    type Marker: Clone + Debug;

    /// Whether [`Aggregate::apply`] and [`Aggregate::compose`] are
    /// implemented and bulk range updates may be used.
    const RANGE_UPDATES: bool = false;

    /// Summary of the single-element segment holding `leaf`.
    fn from_leaf(leaf: &Self::Leaf) -> Self;

    /// Summary of the union segment; `self` covers the positions
    /// immediately to the left of `right`.
    fn combine(&self, right: &Self) -> Self;

    /// Applies a bulk update to this summary in closed form, given the
    /// length of the segment it covers.
    ///
    /// The default signals that the aggregate has no bulk-update support;
    /// lazy-capable implementations override it together with
    /// [`Aggregate::compose`] and set [`Aggregate::RANGE_UPDATES`].
    fn apply(&mut self, marker: &Self::Marker, segment_len: usize) -> Result<(), TreeError> {
        let _ = (marker, segment_len);
        Err(TreeError::UnsupportedOperation {
            aggregate: std::any::type_name::<Self>(),
        })
    }

    /// Folds `next` into an already-pending `prev` so that applying the
    /// composed marker once equals applying `prev` then `next`.
    fn compose(prev: &mut Self::Marker, next: &Self::Marker) -> Result<(), TreeError> {
        let _ = (prev, next);
        Err(TreeError::UnsupportedOperation {
            aggregate: std::any::type_name::<Self>(),
        })
    }
}
