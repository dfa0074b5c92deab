//! Proptest strategies for rangekit property-based testing
//!
//! Reusable strategies for generating leaf vectors and valid query ranges
//! across the rangekit test suites.

use std::ops::Range;

use proptest::prelude::*;
use rangekit_aggregate::Bracket;

// ============================================================================
// Leaf Vectors
// ============================================================================

/// Strategy for generating i64 leaf vectors of length `0..=max_len`.
pub fn strategy_values(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..=1_000, 0..=max_len)
}

/// Strategy for generating non-empty i64 leaf vectors.
pub fn strategy_nonempty_values(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..=1_000, 1..=max_len)
}

/// Strategy for generating collision-heavy vectors (values `0..=2`), so
/// runs of repeated values actually occur.
pub fn strategy_run_values(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..=2, 1..=max_len)
}

/// Strategy for generating non-empty bracket vectors.
pub fn strategy_brackets(max_len: usize) -> impl Strategy<Value = Vec<Bracket>> {
    prop::collection::vec(
        prop_oneof![Just(Bracket::Open), Just(Bracket::Close)],
        1..=max_len,
    )
}

/// Strategy for generating non-empty bit vectors.
pub fn strategy_bits(max_len: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..=max_len)
}

// ============================================================================
// Ranges
// ============================================================================

/// Strategy for generating a valid non-empty half-open subrange of
/// `0..len`. `len` must be at least 1.
pub fn strategy_range_in(len: usize) -> impl Strategy<Value = Range<usize>> {
    (0..len).prop_flat_map(move |start| ((start + 1)..=len).prop_map(move |end| start..end))
}

/// Strategy for generating a non-empty leaf vector together with a valid
/// query range over it.
pub fn strategy_values_with_range(
    max_len: usize,
) -> impl Strategy<Value = (Vec<i64>, Range<usize>)> {
    strategy_nonempty_values(max_len).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), strategy_range_in(len))
    })
}

/// Strategy for generating a non-empty leaf vector together with two
/// independent valid ranges (say, one update and one query).
pub fn strategy_values_with_two_ranges(
    max_len: usize,
) -> impl Strategy<Value = (Vec<i64>, Range<usize>, Range<usize>)> {
    strategy_nonempty_values(max_len).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), strategy_range_in(len), strategy_range_in(len))
    })
}
