use crate::*;

/// Append-only record of opponent bids, in observation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferHistory(Vec<Bid>);

impl OfferHistory {
    pub fn push(&mut self, bid: Bid) {
        self.0.push(bid);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn last(&self) -> Option<&Bid> {
        self.0.last()
    }
    /// Bids in `[start, end)`, both bounds clamped to what has been recorded.
    pub fn window(&self, start: usize, end: usize) -> &[Bid] {
        let end = end.min(self.0.len());
        let start = start.min(end);
        &self.0[start..end]
    }
}
