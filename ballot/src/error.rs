use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BallotError {
    #[error("address {0} does not have the right to vote")]
    NoVotingRight(String),

    #[error("voter {0} does not exist")]
    VoterNotFound(String),

    #[error("delegate {0} does not exist")]
    DelegateNotFound(String),

    #[error("voter {0} has already voted")]
    AlreadyVoted(String),

    #[error("proposal index out of bounds: {index} >= {count}")]
    ProposalOutOfBounds { index: usize, count: usize },

    #[error("delegate cannot be the caller")]
    SelfDelegation,

    #[error("delegation chain loops back to {0}")]
    DelegationCycle(String),

    #[error("duplicate voter {0} in the eligible set")]
    DuplicateVoter(String),

    #[error("caller {0} is not the owner")]
    NotOwner(String),
}
