//! Multilateral approval rounds.
//!
//! - [`Ballot`] — Candidates and powers of one voting round
//! - [`Vote`] / [`Votes`] — What the party approves
//! - [`VotingPolicy`] — Acceptance applied to every candidate

mod ballot;
mod policy;
mod vote;

pub use ballot::*;
pub use policy::*;
pub use vote::*;
