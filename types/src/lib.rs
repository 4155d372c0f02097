//! Fundamental types for the agora ballot core.
//!
//! This crate defines the types shared across the workspace: account
//! addresses (caller identities) and integer voting weight.

pub mod address;
pub mod weight;

pub use address::AccountAddress;
pub use weight::VoteWeight;
