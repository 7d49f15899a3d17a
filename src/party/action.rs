use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Identity of a negotiating party, as assigned by the host.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(String);

impl PartyId {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PartyId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
impl From<String> for PartyId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something a party did during the session.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Offer { actor: PartyId, bid: Bid },
    Accept { actor: PartyId, bid: Bid },
    EndNegotiation { actor: PartyId },
}

impl Action {
    pub fn actor(&self) -> &PartyId {
        match self {
            Self::Offer { actor, .. } => actor,
            Self::Accept { actor, .. } => actor,
            Self::EndNegotiation { actor } => actor,
        }
    }
    pub fn bid(&self) -> Option<&Bid> {
        match self {
            Self::Offer { bid, .. } => Some(bid),
            Self::Accept { bid, .. } => Some(bid),
            Self::EndNegotiation { .. } => None,
        }
    }
    pub fn is_offer(&self) -> bool {
        matches!(self, Self::Offer { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Offer { actor, bid } => write!(f, "{} offers {}", actor, bid),
            Self::Accept { actor, bid } => write!(f, "{} accepts {}", actor, bid),
            Self::EndNegotiation { actor } => write!(f, "{} walks away", actor),
        }
    }
}
