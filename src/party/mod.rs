//! Session facade.
//!
//! - [`Progress`] — Round-based session clock
//! - [`PartyId`] / [`Action`] — Who did what
//! - [`Inform`] / [`Outbound`] — Host notifications and replies
//! - [`Party`] — Owns the session state and dispatches notifications

mod action;
mod inform;
mod party;
mod progress;

pub use action::*;
pub use inform::*;
pub use party::*;
pub use progress::*;
