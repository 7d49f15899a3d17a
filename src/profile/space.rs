use crate::*;

/// A utility function over the bids of a domain.
pub trait UtilitySpace {
    /// The domain whose bids this space evaluates.
    fn domain(&self) -> &Domain;
    /// Utility of a bid in [0, 1], rounded to [`DECIMALS`] places.
    fn utility(&self, bid: &Bid) -> Utility;
    /// Walk-away bid, if the profile declares one.
    fn reservation(&self) -> Option<&Bid> {
        None
    }
}

/// Capability marker for additive utility spaces.
///
/// Utility is the weighted sum of per-issue value utilities. Only spaces
/// implementing this trait can drive the ranking, schedule, and acceptance
/// policy.
pub trait LinearAdditive: UtilitySpace {
    /// Weight of an issue; weights over the domain sum to one.
    fn weight(&self, issue: &Issue) -> Utility;
    /// Utility of a value on one issue, in [0, 1].
    fn evaluate(&self, issue: &Issue, value: &Value) -> Utility;
    /// Weighted sum over the issues the bid assigns.
    fn additive(&self, bid: &Bid) -> Utility {
        quantize(
            bid.iter()
                .map(|(issue, value)| self.weight(issue) * self.evaluate(issue, value))
                .sum(),
        )
    }
}
