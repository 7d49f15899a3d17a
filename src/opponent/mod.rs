//! Opponent preference estimation from observed proposals.

mod frequency;

pub use frequency::*;
