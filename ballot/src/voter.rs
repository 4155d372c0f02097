//! Voter records.

use agora_types::{AccountAddress, VoteWeight};
use serde::{Deserialize, Serialize};

/// A registered identity with voting weight, delegation state, and cast-vote
/// state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// The account this record belongs to.
    pub address: AccountAddress,
    /// Influence carried by this voter. Every registered voter starts at 1;
    /// the terminus of a delegation accumulates the delegator's weight.
    pub weight: VoteWeight,
    /// Whether this voter's weight has been committed, either by a direct
    /// vote or by delegating it away.
    pub voted: bool,
    /// Proposal index this voter's weight was credited to. Stays `None` for
    /// a delegator whose chain terminus had not voted at delegation time.
    pub vote: Option<usize>,
    /// Immediate delegation target (not the resolved chain terminus).
    pub delegate: Option<AccountAddress>,
}

impl Voter {
    /// A freshly enrolled voter with one unit of weight.
    pub fn registered(address: AccountAddress) -> Self {
        Self {
            address,
            weight: VoteWeight::ONE,
            voted: false,
            vote: None,
            delegate: None,
        }
    }

    /// Sentinel record for an identity outside the eligible set.
    ///
    /// Zero weight distinguishes the sentinel from any real record: real
    /// records never drop below weight 1.
    pub fn unregistered(address: AccountAddress) -> Self {
        Self {
            address,
            weight: VoteWeight::ZERO,
            voted: false,
            vote: None,
            delegate: None,
        }
    }

    /// Whether this record belongs to the eligible set.
    pub fn is_registered(&self) -> bool {
        !self.weight.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_voter_starts_with_unit_weight() {
        let v = Voter::registered(AccountAddress::new("0xa1"));
        assert_eq!(v.weight, VoteWeight::ONE);
        assert!(!v.voted);
        assert!(v.vote.is_none());
        assert!(v.delegate.is_none());
        assert!(v.is_registered());
    }

    #[test]
    fn sentinel_is_not_registered() {
        let v = Voter::unregistered(AccountAddress::new("0xff"));
        assert!(v.weight.is_zero());
        assert!(!v.is_registered());
    }
}
