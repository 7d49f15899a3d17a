use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Round-based session progress.
///
/// Rounds count from one. The party advances its own copy after every turn
/// it takes, so `round` is the turn about to be played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progress {
    round: Round,
    duration: Round,
}

impl Progress {
    pub fn new(round: Round, duration: Round) -> Self {
        Self { round, duration }
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn duration(&self) -> Round {
        self.duration
    }
    /// Rounds completed before the current one.
    pub fn elapsed(&self) -> Round {
        self.round.saturating_sub(1)
    }
    /// Rounds completed once the last round starts.
    pub fn span(&self) -> Round {
        self.duration.saturating_sub(1)
    }
    /// Share of the session's rounds reached, one for a zero-round session.
    pub fn fraction(&self) -> Utility {
        match self.duration {
            0 => Utility::ONE,
            n => quantize(Utility::from(self.round) / Utility::from(n)),
        }
    }
    pub fn is_over(&self) -> bool {
        self.round >= self.duration
    }
    pub fn advance(&mut self) {
        self.round = self.round.saturating_add(1);
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.round, self.duration)
    }
}
