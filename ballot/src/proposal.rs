//! Election proposals.

use agora_types::VoteWeight;
use serde::{Deserialize, Serialize};

/// An election option with a name and accumulated vote weight.
///
/// Proposals are created atomically at registry construction from an ordered
/// name list; the index into that order is the proposal's permanent
/// identifier. Nothing mutates a proposal afterwards except `vote_count`
/// increments applied by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Human-readable label.
    pub name: String,
    /// Total weight credited to this proposal so far.
    pub vote_count: VoteWeight,
}

impl Proposal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vote_count: VoteWeight::ZERO,
        }
    }
}
