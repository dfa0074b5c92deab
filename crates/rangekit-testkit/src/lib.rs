//! Workspace-only test helpers for rangekit.
//!
//! Naive oracles live at the crate root; proptest strategies live under
//! [`proptest`]. Keeping these in a microcrate avoids copy-paste across the
//! aggregate, segtree, and fenwick test suites.

pub mod proptest;

use rangekit_aggregate::{Aggregate, Bracket};

/// Folds leaves into one aggregate with a plain left-to-right linear scan,
/// the O(n) reference for any tree-built answer. `None` for empty input.
pub fn fold_aggregates<A: Aggregate>(leaves: &[A::Leaf]) -> Option<A> {
    let mut aggregates = leaves.iter().map(A::from_leaf);
    let first = aggregates.next()?;
    Some(aggregates.fold(first, |acc, next| acc.combine(&next)))
}

/// Best non-empty subarray sum by brute-force scan. `None` for empty input.
pub fn naive_best_subarray(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let mut best = i64::MIN;
    for start in 0..values.len() {
        let mut sum = 0;
        for &value in &values[start..] {
            sum += value;
            best = best.max(sum);
        }
    }
    Some(best)
}

/// Length of the longest run of equal adjacent values. Zero for empty input.
pub fn naive_longest_run(values: &[i64]) -> usize {
    let mut best = 0;
    let mut current = 0;
    let mut previous = None;
    for &value in values {
        current = if previous == Some(value) { current + 1 } else { 1 };
        best = best.max(current);
        previous = Some(value);
    }
    best
}

/// Classic stack-style balance check, independent of the unmatched-count
/// bookkeeping the tree aggregate uses.
pub fn naive_is_balanced(brackets: &[Bracket]) -> bool {
    let mut depth: usize = 0;
    for bracket in brackets {
        match bracket {
            Bracket::Open => depth += 1,
            Bracket::Close => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
        }
    }
    depth == 0
}
