use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

/// Conditional approval of a bid.
///
/// The vote binds only if the coalition approving the bid ends up with a
/// combined power within `[min_power, max_power]`. Whether it does is for
/// the voting protocol to decide.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vote {
    pub actor: PartyId,
    pub bid: Bid,
    pub min_power: Power,
    pub max_power: Power,
}

/// Every vote a party casts in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    pub actor: PartyId,
    pub votes: BTreeSet<Vote>,
}

impl Votes {
    pub fn len(&self) -> usize {
        self.votes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Vote> {
        self.votes.iter()
    }
    pub fn contains(&self, bid: &Bid) -> bool {
        self.votes.iter().any(|vote| &vote.bid == bid)
    }
}

impl std::fmt::Display for Votes {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} votes for", self.actor)?;
        for vote in self.votes.iter() {
            write!(f, " {}[{}..{}]", vote.bid, vote.min_power, vote.max_power)?;
        }
        Ok(())
    }
}
