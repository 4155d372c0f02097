//! Integer voting weight.
//!
//! Weight is represented as a plain unsigned integer (u64) so tallies are
//! deterministic. Every registered voter starts at weight 1; delegation moves
//! whole units between voters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Voting weight carried by a voter or accumulated by a proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VoteWeight(u64);

impl VoteWeight {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Add for VoteWeight {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for VoteWeight {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for VoteWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_arithmetic() {
        let w = VoteWeight::ONE + VoteWeight::new(2);
        assert_eq!(w.raw(), 3);
        assert!(!w.is_zero());
        assert!(VoteWeight::ZERO.is_zero());
    }

    #[test]
    fn checked_add_detects_overflow() {
        let max = VoteWeight::new(u64::MAX);
        assert_eq!(max.checked_add(VoteWeight::ONE), None);
        assert_eq!(max.saturating_add(VoteWeight::ONE), max);
    }
}
