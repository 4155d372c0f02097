//! Single-election ballot core — proposal registration, restricted voting,
//! transitive vote delegation, and owner-gated tallying.
//!
//! Two cooperating components over one shared state:
//! - [`Registry`] owns the fixed proposal list, the voter table, and the
//!   owner identity. Created once at initialization; the proposal list and
//!   eligible set are fixed thereafter.
//! - [`BallotEngine`] owns the transition rules: cast-vote, delegate (with
//!   transitive chain resolution), and winner computation.
//!
//! Identity is asserted by the caller context. Signature verification,
//! transaction ordering, and storage mechanics are external collaborators.

pub mod engine;
pub mod error;
pub mod proposal;
pub mod registry;
pub mod voter;

pub use engine::BallotEngine;
pub use error::BallotError;
pub use proposal::Proposal;
pub use registry::{Registry, RegistrySnapshot};
pub use voter::Voter;
