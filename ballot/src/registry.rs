//! The election registry — the proposal table, the voter table, and the owner.

use crate::error::BallotError;
use crate::proposal::Proposal;
use crate::voter::Voter;
use agora_types::AccountAddress;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Owns the shared state of one election.
///
/// Created once at initialization; the proposal list and the eligible set are
/// fixed thereafter. All mutation goes through the engine's `vote` and
/// `delegate` entry points.
pub struct Registry {
    /// Proposals in input order; the index is the proposal identifier.
    pub(crate) proposals: Vec<Proposal>,
    /// Voter records keyed by address.
    pub(crate) voters: HashMap<AccountAddress, Voter>,
    /// The identity allowed to compute winners.
    owner: AccountAddress,
}

impl Registry {
    /// Create a registry with one proposal per name, in input order, and one
    /// weight-1 voter record per eligible address.
    ///
    /// The eligible list must not name the same address twice.
    pub fn new(
        proposal_names: Vec<String>,
        eligible: Vec<AccountAddress>,
        owner: AccountAddress,
    ) -> Result<Self, BallotError> {
        let proposals = proposal_names.into_iter().map(Proposal::new).collect();
        let mut voters = HashMap::with_capacity(eligible.len());
        for address in eligible {
            if voters.contains_key(&address) {
                return Err(BallotError::DuplicateVoter(address.to_string()));
            }
            voters.insert(address.clone(), Voter::registered(address));
        }
        Ok(Self {
            proposals,
            voters,
            owner,
        })
    }

    /// The proposal at `index`.
    pub fn get_proposal(&self, index: usize) -> Result<&Proposal, BallotError> {
        self.proposals
            .get(index)
            .ok_or(BallotError::ProposalOutOfBounds {
                index,
                count: self.proposals.len(),
            })
    }

    /// Snapshot of the voter record for `address`.
    ///
    /// Unregistered identities get the zero-weight sentinel record; callers
    /// check [`Voter::is_registered`] rather than matching on an error.
    pub fn get_voter(&self, address: &AccountAddress) -> Voter {
        self.voters
            .get(address)
            .cloned()
            .unwrap_or_else(|| Voter::unregistered(address.clone()))
    }

    /// Number of proposals in this election.
    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    /// Number of registered voters.
    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// The identity recorded at initialization as the owner.
    pub fn owner(&self) -> &AccountAddress {
        &self.owner
    }

    /// Iterate proposals in index order.
    pub fn proposals(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.iter()
    }
}

/// Meta-store key used for persisting the registry state.
const REGISTRY_META_KEY: &str = "ballot_registry_state";

/// Serializable snapshot of the full election state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub proposals: Vec<Proposal>,
    pub voters: HashMap<AccountAddress, Voter>,
    pub owner: AccountAddress,
}

impl Registry {
    /// Serialize the election state to bytes for persistence.
    pub fn save_state(&self) -> Vec<u8> {
        let snapshot = RegistrySnapshot {
            proposals: self.proposals.clone(),
            voters: self.voters.clone(),
            owner: self.owner.clone(),
        };
        bincode::serialize(&snapshot).unwrap_or_default()
    }

    /// Restore the election state from serialized bytes.
    ///
    /// Returns `None` when the bytes do not decode; there is no meaningful
    /// default election to fall back to.
    pub fn load_state(data: &[u8]) -> Option<Self> {
        let snapshot: RegistrySnapshot = bincode::deserialize(data).ok()?;
        Some(Self {
            proposals: snapshot.proposals,
            voters: snapshot.voters,
            owner: snapshot.owner,
        })
    }

    /// The meta-store key used for registry persistence.
    pub fn meta_key() -> &'static str {
        REGISTRY_META_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::VoteWeight;

    fn addr(name: &str) -> AccountAddress {
        AccountAddress::new(format!("0x{name}"))
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_registry_sets_proposals_in_order() {
        let r = Registry::new(
            names(&["Proposal 1", "Proposal 2", "Proposal 3"]),
            vec![addr("a")],
            addr("owner"),
        )
        .unwrap();

        assert_eq!(r.proposal_count(), 3);
        for (i, expected) in ["Proposal 1", "Proposal 2", "Proposal 3"].iter().enumerate() {
            let p = r.get_proposal(i).unwrap();
            assert_eq!(p.name, *expected);
            assert_eq!(p.vote_count, VoteWeight::ZERO);
        }
    }

    #[test]
    fn new_registry_enrolls_each_eligible_address() {
        let eligible: Vec<_> = (0..7).map(|i| addr(&format!("v{i}"))).collect();
        let r = Registry::new(names(&["A", "B"]), eligible.clone(), addr("owner")).unwrap();

        assert_eq!(r.voter_count(), 7);
        for a in &eligible {
            let v = r.get_voter(a);
            assert_eq!(v.address, *a);
            assert_eq!(v.weight, VoteWeight::ONE);
            assert!(v.is_registered());
        }
    }

    #[test]
    fn duplicate_eligible_address_rejected() {
        let result = Registry::new(
            names(&["A"]),
            vec![addr("a"), addr("b"), addr("a")],
            addr("owner"),
        );
        assert_eq!(result.err(), Some(BallotError::DuplicateVoter(addr("a").to_string())));
    }

    #[test]
    fn get_proposal_out_of_bounds() {
        let r = Registry::new(names(&["A"]), vec![addr("a")], addr("owner")).unwrap();
        assert_eq!(
            r.get_proposal(8).err(),
            Some(BallotError::ProposalOutOfBounds { index: 8, count: 1 })
        );
    }

    #[test]
    fn unknown_address_gets_sentinel() {
        let r = Registry::new(names(&["A"]), vec![addr("a")], addr("owner")).unwrap();
        let v = r.get_voter(&addr("stranger"));
        assert!(!v.is_registered());
        assert!(v.weight.is_zero());
    }

    #[test]
    fn snapshot_roundtrip_preserves_state() {
        let r = Registry::new(
            names(&["A", "B"]),
            vec![addr("a"), addr("b")],
            addr("owner"),
        )
        .unwrap();

        let bytes = r.save_state();
        let restored = Registry::load_state(&bytes).expect("snapshot should decode");

        assert_eq!(restored.proposal_count(), 2);
        assert_eq!(restored.voter_count(), 2);
        assert_eq!(restored.owner(), &addr("owner"));
        assert_eq!(restored.get_voter(&addr("a")), r.get_voter(&addr("a")));
    }

    #[test]
    fn load_state_rejects_garbage() {
        assert!(Registry::load_state(&[0xde, 0xad, 0xbe, 0xef]).is_none());
    }
}
