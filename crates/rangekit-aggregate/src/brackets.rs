//! Bracket-balance summaries for matched-parentheses checks.

use serde::{Deserialize, Serialize};

use crate::Aggregate;

/// One bracket character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bracket {
    Open,
    Close,
}

impl Bracket {
    /// The opposite bracket.
    pub fn flipped(self) -> Self {
        match self {
            Bracket::Open => Bracket::Close,
            Bracket::Close => Bracket::Open,
        }
    }
}

/// Unmatched bracket counts after all interior matching cancels out.
///
/// Combining is order-sensitive: `"()"` balances while `")("` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketBalance {
    /// Opens left over, still waiting for a close to the right.
    pub unmatched_open: usize,
    /// Closes left over, with no open to their left.
    pub unmatched_close: usize,
}

impl BracketBalance {
    /// True when every bracket in the segment is matched.
    pub fn is_balanced(&self) -> bool {
        self.unmatched_open == 0 && self.unmatched_close == 0
    }
}

impl Aggregate for BracketBalance {
    type Leaf = Bracket;
    type Marker = ();

    fn from_leaf(leaf: &Bracket) -> Self {
        match leaf {
            Bracket::Open => BracketBalance {
                unmatched_open: 1,
                unmatched_close: 0,
            },
            Bracket::Close => BracketBalance {
                unmatched_open: 0,
                unmatched_close: 1,
            },
        }
    }

    fn combine(&self, right: &Self) -> Self {
        // Opens from the left side pair off against closes from the right.
        let cancelled = self.unmatched_open.min(right.unmatched_close);
        BracketBalance {
            unmatched_open: self.unmatched_open - cancelled + right.unmatched_open,
            unmatched_close: self.unmatched_close + right.unmatched_close - cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(brackets: &[Bracket]) -> BracketBalance {
        let mut aggregates = brackets.iter().map(BracketBalance::from_leaf);
        let first = aggregates.next().unwrap();
        aggregates.fold(first, |acc, next| acc.combine(&next))
    }

    #[test]
    fn test_pair_balances() {
        let agg = fold(&[Bracket::Open, Bracket::Close]);
        assert!(agg.is_balanced());
    }

    #[test]
    fn test_reversed_pair_does_not_balance() {
        let agg = fold(&[Bracket::Close, Bracket::Open]);
        assert!(!agg.is_balanced());
        assert_eq!(agg.unmatched_open, 1);
        assert_eq!(agg.unmatched_close, 1);
    }

    #[test]
    fn test_nested() {
        let agg = fold(&[Bracket::Open, Bracket::Open, Bracket::Close, Bracket::Close]);
        assert!(agg.is_balanced());
    }

    #[test]
    fn test_unmatched_open_survives() {
        let agg = fold(&[Bracket::Open, Bracket::Open, Bracket::Close]);
        assert_eq!(agg.unmatched_open, 1);
        assert_eq!(agg.unmatched_close, 0);
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Bracket::Open.flipped(), Bracket::Close);
        assert_eq!(Bracket::Close.flipped(), Bracket::Open);
    }
}
