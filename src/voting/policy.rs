use crate::*;

/// Voting policy.
///
/// Approves every candidate the acceptance rule would accept if the
/// candidate's proposer had offered it, judging the sole power leader of the
/// round by the best recent offer rather than the average. Each approval
/// carries the configured coalition power bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotingPolicy {
    min_power: Power,
    max_power: Power,
}

impl VotingPolicy {
    pub fn new(config: &Config) -> Self {
        Self {
            min_power: config.min_power,
            max_power: config.max_power,
        }
    }

    /// Cast at most one vote per candidate. Candidates without a bid are
    /// skipped.
    pub fn vote<F>(&self, me: &PartyId, ballot: &Ballot, approve: F) -> Votes
    where
        F: Fn(&Bid, Aggregate) -> bool,
    {
        let ref leaders = Leaders::of(&ballot.powers);
        let votes = ballot
            .candidates
            .iter()
            .filter_map(|candidate| candidate.bid.as_ref().map(|bid| (&candidate.actor, bid)))
            .filter(|&(actor, bid)| approve(bid, Aggregate::of(Some(leaders), Some(actor))))
            .inspect(|&(actor, bid)| log::debug!("[voting] approving {} from {}", bid, actor))
            .map(|(_, bid)| Vote {
                actor: me.clone(),
                bid: bid.clone(),
                min_power: self.min_power,
                max_power: self.max_power,
            })
            .collect();
        Votes {
            actor: me.clone(),
            votes,
        }
    }
}
