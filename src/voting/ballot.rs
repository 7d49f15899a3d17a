use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A proposal put up for approval, with the party that made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub actor: PartyId,
    pub bid: Option<Bid>,
}

impl Candidate {
    pub fn new(actor: PartyId, bid: Option<Bid>) -> Self {
        Self { actor, bid }
    }
}

/// One voting round: the candidates and this round's power table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ballot {
    pub candidates: Vec<Candidate>,
    pub powers: PowerTable,
}

impl Ballot {
    pub fn new(candidates: Vec<Candidate>, powers: PowerTable) -> Self {
        Self { candidates, powers }
    }
}
