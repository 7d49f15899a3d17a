//! Session parameters.
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Free-form parameters attached to the session settings by the host.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// Tunables of one negotiation session.
///
/// Defaults come from the crate constants. Host parameters override them
/// field by field; a parameter of the wrong type or out of range is ignored
/// and the default kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Minimum coalition power written into every vote.
    pub min_power: Power,
    /// Maximum coalition power written into every vote.
    pub max_power: Power,
    /// Fraction of the session after which the time criterion holds.
    pub high_time: Utility,
    /// Fraction of the session spent offering the best bid only.
    pub early_phase: Utility,
    /// Capacity of the best-bids window.
    pub window_size: usize,
    /// Seed for window sampling; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_power: MIN_POWER,
            max_power: MAX_POWER,
            high_time: HIGH_TIME,
            early_phase: EARLY_PHASE,
            window_size: WINDOW_SIZE,
            seed: None,
        }
    }
}

impl Config {
    fn integer(parameters: &Parameters, key: &str) -> Option<u64> {
        parameters.get(key).and_then(serde_json::Value::as_u64)
    }
    fn fraction(parameters: &Parameters, key: &str) -> Option<Utility> {
        parameters
            .get(key)
            .and_then(serde_json::Value::as_f64)
            .and_then(|f| Utility::try_from(f).ok())
            .map(quantize)
            .filter(|f| *f >= Utility::ZERO && *f <= Utility::ONE)
    }
}

impl From<&Parameters> for Config {
    fn from(parameters: &Parameters) -> Self {
        let default = Self::default();
        Self {
            min_power: Self::integer(parameters, "minPower").unwrap_or(default.min_power),
            max_power: Self::integer(parameters, "maxPower").unwrap_or(default.max_power),
            high_time: Self::fraction(parameters, "highTime").unwrap_or(default.high_time),
            early_phase: Self::fraction(parameters, "earlyPhase").unwrap_or(default.early_phase),
            window_size: Self::integer(parameters, "windowSize")
                .filter(|w| *w > 0 && *w <= u16::MAX as u64)
                .map(|w| w as usize)
                .unwrap_or(default.window_size),
            seed: Self::integer(parameters, "seed").or(default.seed),
        }
    }
}
