use crate::*;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Voting power of every party in the current round.
pub type PowerTable = BTreeMap<PartyId, Power>;

/// Parties tied for the maximum power of a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaders(BTreeSet<PartyId>);

impl Leaders {
    pub fn of(powers: &PowerTable) -> Self {
        match powers.values().max() {
            None => Self::default(),
            Some(max) => Self(
                powers
                    .iter()
                    .filter(|(_, p)| *p == max)
                    .map(|(party, _)| party.clone())
                    .collect(),
            ),
        }
    }
    /// Does this party hold the maximum power alone?
    pub fn is_sole(&self, party: &PartyId) -> bool {
        self.0.len() == 1 && self.0.contains(party)
    }
    pub fn iter(&self) -> impl Iterator<Item = &PartyId> {
        self.0.iter()
    }
}

/// How the combined criterion summarizes the window of past offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Best utility in the window: the offerer leads alone and can afford
    /// to be held to its best.
    Max,
    /// Mean utility in the window.
    Mean,
}

impl Aggregate {
    /// Max for the sole power leader, mean for everybody else and for
    /// offers made outside a voting round.
    pub fn of(leaders: Option<&Leaders>, offerer: Option<&PartyId>) -> Self {
        match (leaders, offerer) {
            (Some(leaders), Some(party)) if leaders.is_sole(party) => Self::Max,
            _ => Self::Mean,
        }
    }
    /// Summarize a non-empty set of utilities.
    pub fn apply(&self, utilities: &[Utility]) -> Option<Utility> {
        match self {
            Self::Max => utilities.iter().max().copied(),
            Self::Mean if utilities.is_empty() => None,
            Self::Mean => Some(quantize(
                utilities.iter().sum::<Utility>() / Utility::from(utilities.len() as u64),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    fn powers(entries: &[(&str, Power)]) -> PowerTable {
        entries
            .iter()
            .map(|(party, power)| (PartyId::from(*party), *power))
            .collect()
    }

    #[test]
    fn sole_leader() {
        let leaders = Leaders::of(&powers(&[("a", 3), ("b", 1), ("c", 2)]));
        assert!(leaders.is_sole(&PartyId::from("a")));
        assert!(!leaders.is_sole(&PartyId::from("b")));
        assert_eq!(
            Aggregate::of(Some(&leaders), Some(&PartyId::from("a"))),
            Aggregate::Max
        );
    }

    #[test]
    fn tied_leaders_use_mean() {
        let leaders = Leaders::of(&powers(&[("a", 3), ("b", 3), ("c", 2)]));
        assert_eq!(leaders.iter().count(), 2);
        assert!(!leaders.is_sole(&PartyId::from("a")));
        assert_eq!(
            Aggregate::of(Some(&leaders), Some(&PartyId::from("a"))),
            Aggregate::Mean
        );
    }

    #[test]
    fn no_power_context_uses_mean() {
        assert_eq!(Leaders::of(&PowerTable::new()), Leaders::default());
        assert_eq!(Aggregate::of(None, Some(&PartyId::from("a"))), Aggregate::Mean);
    }

    #[test]
    fn apply_aggregates() {
        let us = [tenths(2), tenths(9), tenths(4)];
        assert_eq!(Aggregate::Max.apply(&us), Some(tenths(9)));
        assert_eq!(Aggregate::Mean.apply(&us), Some(tenths(5)));
        assert_eq!(Aggregate::Max.apply(&[]), None);
        assert_eq!(Aggregate::Mean.apply(&[]), None);
    }
}
