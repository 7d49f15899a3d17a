//! Negotiation domain primitives.
//!
//! - [`Issue`] — A named dimension of a bid
//! - [`Value`] — An admissible assignment to one issue
//! - [`Bid`] — A (possibly partial) assignment of values to issues
//! - [`Domain`] — The ordered issue set and its enumerable bid space

mod bid;
mod domain;
mod issue;
mod value;

pub use bid::*;
pub use domain::*;
pub use issue::*;
pub use value::*;
