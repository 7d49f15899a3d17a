//! Negotiation strategy for multi-issue bilateral and multilateral sessions.
//!
//! The engine models the opponent by counting the values it proposes,
//! concedes along a precomputed ranking of its own bids, accepts incoming
//! bids with a next-bid / time / combined criterion, and votes in
//! multilateral approval rounds by reusing that acceptance rule.
//!
//! # Module Structure
//!
//! - `domain` — Issues, values, bids, and bid space enumeration
//! - `profile` — Self utility functions (linear-additive capability)
//! - `opponent` — Frequency-counting opponent model
//! - `concession` — Bid ranking and the concession schedule
//! - `config` — Session tunables read from host parameters
//! - `acceptance` — Offer history and the acceptance policy
//! - `voting` — Votes and the voting policy
//! - `party` — Session facade driven by host notifications
#![allow(dead_code)]

mod acceptance;
mod concession;
mod config;
mod domain;
mod error;
mod opponent;
mod party;
mod profile;
mod voting;

#[cfg(test)]
mod fixtures;

pub use acceptance::*;
pub use concession::*;
pub use config::*;
pub use domain::*;
pub use error::*;
pub use opponent::*;
pub use party::*;
pub use profile::*;
pub use voting::*;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Utilities, fractions, and progress ratios in fixed-point decimal.
pub type Utility = Decimal;
/// Voting power of a party.
pub type Power = u64;
/// Round counter supplied by the host session.
pub type Round = u32;

// ============================================================================
// ARITHMETIC
// ============================================================================
/// Decimal places kept by every utility computation.
pub const DECIMALS: u32 = 4;

/// Round half-up to [`DECIMALS`] places.
pub fn quantize(x: Utility) -> Utility {
    x.round_dp_with_strategy(DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

// ============================================================================
// CONCESSION SCHEDULE
// Early phase offers the best bid; window phase walks the ranking down.
// ============================================================================
/// Fraction of the session (in rounds) spent offering the best bid only.
pub const EARLY_PHASE: Utility = Decimal::from_parts(9, 0, 0, false, 2);
/// Capacity of the best-bids window sampled during the window phase.
pub const WINDOW_SIZE: usize = 5;

// ============================================================================
// ACCEPTANCE POLICY
// ============================================================================
/// Fraction of the session after which any bid passing the
/// combined criterion is accepted regardless of the next-bid test.
pub const HIGH_TIME: Utility = Decimal::from_parts(99, 0, 0, false, 2);

// ============================================================================
// VOTING POLICY
// ============================================================================
/// Minimum coalition power required for a vote to bind.
pub const MIN_POWER: Power = 2;
/// Maximum coalition power accepted by a vote.
pub const MAX_POWER: Power = 9_999_999;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_rounds_half_up() {
        assert_eq!(quantize(Decimal::new(12345, 5)), Decimal::new(1235, 4));
        assert_eq!(quantize(Decimal::new(12344, 5)), Decimal::new(1234, 4));
        assert_eq!(quantize(Decimal::ONE / Decimal::from(3)), Decimal::new(3333, 4));
    }

    #[test]
    fn constants_match_decimal_literals() {
        assert_eq!(EARLY_PHASE, Decimal::new(9, 2));
        assert_eq!(HIGH_TIME, Decimal::new(99, 2));
    }
}
