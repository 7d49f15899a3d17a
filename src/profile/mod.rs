//! Self utility functions.
//!
//! The engine binds only to [`LinearAdditive`] spaces. Other profile kinds
//! delivered by the host are rejected when the session is configured.

mod additive;
mod profile;
mod space;

pub use additive::*;
pub use profile::*;
pub use space::*;
