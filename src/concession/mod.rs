//! Bid generation by monotonic concession.
//!
//! - [`Ranking`] — Every bid sorted by self-utility, built once per session
//! - [`ConcessionState`] — Cursor into the ranking plus the best-bids window
//! - [`Schedule`] — Time-indexed policy choosing the next bid to offer

mod ranking;
mod schedule;
mod state;

pub use ranking::*;
pub use schedule::*;
pub use state::*;
