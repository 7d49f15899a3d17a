use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Session protocol announced in the settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// Stacked alternating offers, bilateral or multilateral.
    #[default]
    Saop,
    /// Multiple offers, partial consensus: alternating offers plus voting.
    Mopac,
    /// Learning session. Nothing to learn; the party reports done at once.
    Learn,
}

impl TryFrom<&str> for Protocol {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "SAOP" => Ok(Self::Saop),
            "MOPAC" => Ok(Self::Mopac),
            "LEARN" => Ok(Self::Learn),
            _ => Err(anyhow::anyhow!("unknown protocol: {}", s)),
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Saop => write!(f, "SAOP"),
            Self::Mopac => write!(f, "MOPAC"),
            Self::Learn => write!(f, "Learn"),
        }
    }
}

/// Everything the party needs to join a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub id: PartyId,
    pub protocol: Protocol,
    pub progress: Progress,
    pub profile: Profile,
    #[serde(default)]
    pub parameters: Parameters,
}

/// Notifications delivered by the hosting session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inform {
    Settings(Settings),
    ActionDone(Action),
    YourTurn,
    Voting(Ballot),
    OptIn,
    Finished,
}

/// Replies the party hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outbound {
    Act(Action),
    Votes(Votes),
    LearningDone(PartyId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_protocol() {
        assert_eq!(Protocol::try_from("SAOP").unwrap(), Protocol::Saop);
        assert_eq!(Protocol::try_from("mopac").unwrap(), Protocol::Mopac);
        assert_eq!(Protocol::try_from(" Learn ").unwrap(), Protocol::Learn);
        assert!(Protocol::try_from("auction").is_err());
    }

    #[test]
    fn inform_round_trips_through_json() {
        let inform = Inform::ActionDone(Action::EndNegotiation {
            actor: PartyId::from("a"),
        });
        let json = serde_json::to_string(&inform).unwrap();
        assert_eq!(serde_json::from_str::<Inform>(&json).unwrap(), inform);
    }
}
