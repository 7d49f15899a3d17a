//! Deciding whether an incoming bid is good enough.
//!
//! - [`OfferHistory`] — Every opponent bid seen this session
//! - [`Leaders`] — Parties tied for the most voting power
//! - [`Acceptance`] — Next-bid, time, and combined criteria

mod history;
mod policy;
mod power;

pub use history::*;
pub use policy::*;
pub use power::*;
