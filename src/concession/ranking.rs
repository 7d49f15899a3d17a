use crate::*;

/// Every bid of the domain ranked by self-utility, best first.
///
/// Ties keep enumeration order (the sort is stable), so two parties with the
/// same profile build identical rankings. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking(Vec<(Bid, Utility)>);

impl Ranking {
    /// Enumerate and rank the profile's bid space.
    pub fn build<P>(profile: &P) -> Result<Self>
    where
        P: LinearAdditive,
    {
        if profile.domain().size().is_none() {
            return Err(NegotiationError::OversizedDomain);
        }
        let mut entries = profile
            .domain()
            .bids()
            .map(|bid| {
                let utility = profile.utility(&bid);
                (bid, utility)
            })
            .collect::<Vec<_>>();
        if entries.is_empty() {
            return Err(NegotiationError::EmptyDomain);
        }
        entries.sort_by(|(_, a), (_, b)| b.cmp(a));
        log::debug!(
            "[ranking] {} bids ranked in {}, best {}",
            entries.len(),
            profile.domain().name(),
            entries[0].1
        );
        Ok(Self(entries))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<(&Bid, Utility)> {
        self.0.get(index).map(|(bid, u)| (bid, *u))
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Bid, Utility)> {
        self.0.iter().map(|(bid, u)| (bid, *u))
    }
    /// Utility-maximizing bid, first-seen on ties.
    pub fn max_bid(&self) -> &Bid {
        &self.0[0].0
    }
    pub fn max_utility(&self) -> Utility {
        self.0[0].1
    }
    /// First entry at or after `from` whose utility is strictly below `threshold`.
    pub fn next_below(&self, from: usize, threshold: Utility) -> Option<(usize, &Bid, Utility)> {
        self.0
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, (_, u))| *u < threshold)
            .map(|(i, (bid, u))| (i, bid, *u))
    }
    /// Bids with utility at or above `threshold`, best first.
    pub fn bids_above(&self, threshold: Utility) -> impl Iterator<Item = &Bid> {
        self.0
            .iter()
            .take_while(move |(_, u)| *u >= threshold)
            .map(|(bid, _)| bid)
    }
}
