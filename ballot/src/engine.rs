//! Ballot engine — the state-transition rules for one election.
//!
//! Three entry points: `vote`, `delegate`, and `compute_winners`. Every call
//! validates all of its preconditions against the registry before touching
//! any record, so a failed transition leaves the election state unchanged.

use crate::error::BallotError;
use crate::registry::Registry;
use agora_types::AccountAddress;
use tracing::debug;

/// Applies state transitions against a [`Registry`].
///
/// The engine holds no state of its own; the registry is the single owned
/// state container and is passed by reference to every entry point.
pub struct BallotEngine;

impl BallotEngine {
    /// Cast the caller's vote for `proposal_index`.
    ///
    /// Credits the proposal with the caller's full current weight, including
    /// any weight accumulated from delegations received before this call.
    pub fn vote(
        &self,
        registry: &mut Registry,
        caller: &AccountAddress,
        proposal_index: usize,
    ) -> Result<(), BallotError> {
        let proposal_count = registry.proposals.len();
        let voter = registry
            .voters
            .get_mut(caller)
            .ok_or_else(|| BallotError::NoVotingRight(caller.to_string()))?;
        if voter.weight.is_zero() {
            return Err(BallotError::NoVotingRight(caller.to_string()));
        }
        if voter.voted {
            return Err(BallotError::AlreadyVoted(caller.to_string()));
        }
        if proposal_index >= proposal_count {
            return Err(BallotError::ProposalOutOfBounds {
                index: proposal_index,
                count: proposal_count,
            });
        }

        voter.voted = true;
        voter.vote = Some(proposal_index);
        let weight = voter.weight;
        if let Some(proposal) = registry.proposals.get_mut(proposal_index) {
            proposal.vote_count += weight;
        }
        debug!(voter = %caller, proposal = proposal_index, weight = %weight, "vote cast");
        Ok(())
    }

    /// Delegate the caller's vote to `target`.
    ///
    /// The delegation chain starting at `target` is resolved to its terminus
    /// before any record changes. If the terminus has already voted, the
    /// caller's weight is credited to the terminus's proposal immediately;
    /// otherwise it accumulates on the terminus, to be counted when the
    /// terminus eventually votes or is itself delegated through.
    ///
    /// The caller's record keeps the immediate target, not the terminus:
    /// later walks through the caller re-follow the chain link by link.
    pub fn delegate(
        &self,
        registry: &mut Registry,
        caller: &AccountAddress,
        target: &AccountAddress,
    ) -> Result<(), BallotError> {
        if target == caller {
            return Err(BallotError::SelfDelegation);
        }
        let caller_record = registry
            .voters
            .get(caller)
            .ok_or_else(|| BallotError::VoterNotFound(caller.to_string()))?;
        if caller_record.voted {
            return Err(BallotError::AlreadyVoted(caller.to_string()));
        }
        let weight = caller_record.weight;
        if !registry.voters.contains_key(target) {
            return Err(BallotError::DelegateNotFound(target.to_string()));
        }
        let terminus = self.resolve_terminus(registry, caller, target)?;
        let terminus_vote = registry
            .voters
            .get(&terminus)
            .and_then(|v| if v.voted { v.vote } else { None });

        // All preconditions hold; apply the transition.
        if let Some(record) = registry.voters.get_mut(caller) {
            record.delegate = Some(target.clone());
            record.voted = true;
            record.vote = terminus_vote;
        }
        match terminus_vote {
            Some(index) => {
                if let Some(proposal) = registry.proposals.get_mut(index) {
                    proposal.vote_count += weight;
                }
                debug!(
                    voter = %caller,
                    delegate = %target,
                    terminus = %terminus,
                    proposal = index,
                    weight = %weight,
                    "delegated to a settled chain, weight credited"
                );
            }
            None => {
                if let Some(record) = registry.voters.get_mut(&terminus) {
                    record.weight += weight;
                }
                debug!(
                    voter = %caller,
                    delegate = %target,
                    terminus = %terminus,
                    weight = %weight,
                    "delegated, weight accumulated on terminus"
                );
            }
        }
        Ok(())
    }

    /// Compute the winning proposal set. Owner only.
    ///
    /// Returns every proposal index sharing the maximum accumulated weight,
    /// in ascending order. Pure read; no state changes.
    pub fn compute_winners(
        &self,
        registry: &Registry,
        caller: &AccountAddress,
    ) -> Result<Vec<usize>, BallotError> {
        if caller != registry.owner() {
            return Err(BallotError::NotOwner(caller.to_string()));
        }
        let max = match registry.proposals.iter().map(|p| p.vote_count).max() {
            Some(max) => max,
            None => return Ok(Vec::new()),
        };
        Ok(registry
            .proposals
            .iter()
            .enumerate()
            .filter(|(_, p)| p.vote_count == max)
            .map(|(index, _)| index)
            .collect())
    }

    /// Walk the delegation chain from `target` to its terminus.
    ///
    /// The walk is bounded by the registered voter count; reaching the caller
    /// or exhausting the bound is a cycle. Every chain link is a registered
    /// voter (delegation targets are validated at creation).
    fn resolve_terminus(
        &self,
        registry: &Registry,
        caller: &AccountAddress,
        target: &AccountAddress,
    ) -> Result<AccountAddress, BallotError> {
        let mut current = target.clone();
        for _ in 0..=registry.voters.len() {
            if &current == caller {
                return Err(BallotError::DelegationCycle(caller.to_string()));
            }
            match registry.voters.get(&current).and_then(|v| v.delegate.clone()) {
                Some(next) => current = next,
                None => return Ok(current),
            }
        }
        Err(BallotError::DelegationCycle(caller.to_string()))
    }
}
