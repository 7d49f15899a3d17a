use crate::*;
use rand::Rng;
use std::collections::VecDeque;

/// Where the concession walk stands.
///
/// `cursor` indexes the last ranking entry conceded to and `threshold` is its
/// utility. The window holds the most recently admitted near-top bids in
/// insertion order; it is seeded with copies of the best bid and afterwards
/// only admits bids below the previous threshold, so its contents never
/// improve.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcessionState {
    cursor: usize,
    threshold: Utility,
    window: VecDeque<Bid>,
}

impl ConcessionState {
    /// Cursor on the best bid, window full of copies of it.
    pub fn seed(ranking: &Ranking, capacity: usize) -> Self {
        Self {
            cursor: 0,
            threshold: ranking.max_utility(),
            window: std::iter::repeat(ranking.max_bid().clone())
                .take(capacity.max(1))
                .collect(),
        }
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn threshold(&self) -> Utility {
        self.threshold
    }
    pub fn window(&self) -> &VecDeque<Bid> {
        &self.window
    }
    /// Concede to a lower ranking entry, evicting the oldest window bid.
    pub fn admit(&mut self, index: usize, bid: Bid, utility: Utility) {
        debug_assert!(utility < self.threshold);
        debug_assert!(index > self.cursor);
        self.cursor = index;
        self.threshold = utility;
        self.window.pop_front();
        self.window.push_back(bid);
    }
    /// Uniformly random window bid.
    pub fn sample(&self, rng: &mut impl Rng) -> &Bid {
        &self.window[rng.random_range(0..self.window.len())]
    }
}
