use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Observable phase of the concession schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ranking not built yet.
    Bootstrap,
    /// Before the early-phase fraction of rounds: offer the best bid.
    Early,
    /// Concede one ranking step per request, offer from the window.
    Window,
    /// Session finished; no more bids.
    Ended,
}

#[derive(Debug)]
enum Stage {
    Bootstrap,
    Ready {
        ranking: Ranking,
        state: ConcessionState,
    },
    Ended,
}

/// Time-indexed concession policy.
///
/// The first request ranks the whole bid space and seeds the window. Until
/// [`Config::early_phase`] of the rounds have passed, the best bid is offered
/// as is. Afterwards every request concedes to the next strictly lower
/// utility in the ranking and offers a uniformly random member of the
/// best-bids window. Once the ranking is exhausted the window is sampled
/// without conceding further.
#[derive(Debug)]
pub struct Schedule {
    stage: Stage,
    early: Utility,
    capacity: usize,
    rng: SmallRng,
}

impl Schedule {
    pub fn new(config: &Config) -> Self {
        Self {
            stage: Stage::Bootstrap,
            early: config.early_phase,
            capacity: config.window_size,
            rng: config
                .seed
                .map(SmallRng::seed_from_u64)
                .unwrap_or_else(SmallRng::from_os_rng),
        }
    }

    pub fn phase(&self, progress: &Progress) -> Phase {
        match self.stage {
            Stage::Bootstrap => Phase::Bootstrap,
            Stage::Ended => Phase::Ended,
            Stage::Ready { .. } if progress.fraction() < self.early => Phase::Early,
            Stage::Ready { .. } => Phase::Window,
        }
    }

    /// Build the ranking and seed the window, once per session.
    pub fn prepare<P>(&mut self, profile: &P) -> Result<()>
    where
        P: LinearAdditive,
    {
        match self.stage {
            Stage::Ended => Err(NegotiationError::SessionEnded),
            Stage::Ready { .. } => Ok(()),
            Stage::Bootstrap => {
                let ranking = Ranking::build(profile)?;
                let state = ConcessionState::seed(&ranking, self.capacity);
                log::debug!(
                    "[schedule] seeded window with {} x {}",
                    state.window().len(),
                    ranking.max_bid()
                );
                self.stage = Stage::Ready { ranking, state };
                Ok(())
            }
        }
    }

    /// Next bid to offer.
    pub fn next<P>(&mut self, profile: &P, progress: &Progress) -> Result<Bid>
    where
        P: LinearAdditive,
    {
        self.prepare(profile)?;
        let phase = self.phase(progress);
        let Self { stage, rng, .. } = self;
        match (stage, phase) {
            (Stage::Ready { ranking, .. }, Phase::Early) => Ok(ranking.max_bid().clone()),
            (Stage::Ready { ranking, state }, _) => {
                match ranking.next_below(state.cursor() + 1, state.threshold()) {
                    Some((index, bid, utility)) => {
                        log::debug!("[schedule] conceding to {} at {}", utility, bid);
                        state.admit(index, bid.clone(), utility);
                    }
                    None => log::debug!("[schedule] ranking exhausted at {}", state.threshold()),
                }
                Ok(state.sample(rng).clone())
            }
            (Stage::Ended, _) => Err(NegotiationError::SessionEnded),
            (Stage::Bootstrap, _) => Err(NegotiationError::UninitializedDomain),
        }
    }

    /// Bid at the concession cursor: the least favourable bid currently on
    /// offer. Read-only, so acceptance checks never move the schedule.
    pub fn reference(&self) -> Result<&Bid> {
        match &self.stage {
            Stage::Ready { ranking, state } => ranking
                .get(state.cursor())
                .map(|(bid, _)| bid)
                .ok_or(NegotiationError::EmptyDomain),
            Stage::Bootstrap => Err(NegotiationError::UninitializedDomain),
            Stage::Ended => Err(NegotiationError::SessionEnded),
        }
    }

    /// Current target utility.
    pub fn threshold(&self) -> Result<Utility> {
        match &self.stage {
            Stage::Ready { state, .. } => Ok(state.threshold()),
            Stage::Bootstrap => Err(NegotiationError::UninitializedDomain),
            Stage::Ended => Err(NegotiationError::SessionEnded),
        }
    }

    pub fn ranking(&self) -> Option<&Ranking> {
        match &self.stage {
            Stage::Ready { ranking, .. } => Some(ranking),
            _ => None,
        }
    }

    pub fn state(&self) -> Option<&ConcessionState> {
        match &self.stage {
            Stage::Ready { state, .. } => Some(state),
            _ => None,
        }
    }

    /// Terminal transition. Every later request fails.
    pub fn end(&mut self) {
        self.stage = Stage::Ended;
    }
}
