use crate::*;
use std::ops::Range;

/// Which rule applies at the current point of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// First half: accept what beats our own next offer.
    Next,
    /// Second half: next-bid or deadline, gated by the recent offer window.
    Combined,
}

/// Acceptance policy.
///
/// A pure function of its inputs: the candidate, the concession schedule's
/// reference bid, session progress, the offer history, and how the offer
/// window is aggregated. With `elapsed = round - 1` and `span = duration - 1`:
///
/// - while `elapsed < span / 2`, accept iff the candidate is worth at least
///   the reference bid (`ac_next`);
/// - afterwards accept iff `(ac_next || ac_time) && ac_combi`, where `ac_time`
///   holds once `elapsed >= high_time * span` and `ac_combi` compares the
///   candidate with the max or mean utility of the history window
///   `[2 * elapsed - span, elapsed]`. An empty window rejects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceptance {
    high_time: Utility,
}

impl Acceptance {
    pub fn new(config: &Config) -> Self {
        Self {
            high_time: config.high_time,
        }
    }

    pub fn criterion(&self, progress: &Progress) -> Criterion {
        match 2 * u64::from(progress.elapsed()) < u64::from(progress.span()) {
            true => Criterion::Next,
            false => Criterion::Combined,
        }
    }

    /// Candidate is worth at least the reference bid.
    pub fn ac_next<P>(&self, profile: &P, candidate: &Bid, reference: &Bid) -> bool
    where
        P: LinearAdditive,
    {
        profile.utility(candidate) >= profile.utility(reference)
    }

    /// The deadline is close enough to take anything reasonable.
    pub fn ac_time(&self, progress: &Progress) -> bool {
        Utility::from(progress.elapsed()) >= self.high_time * Utility::from(progress.span())
    }

    /// History indices considered by the combined criterion.
    pub fn window(&self, progress: &Progress) -> Range<usize> {
        let elapsed = progress.elapsed() as usize;
        let span = progress.span() as usize;
        (2 * elapsed).saturating_sub(span)..elapsed + 1
    }

    /// Candidate beats the aggregate of the offer window,
    /// `None` when the window holds no offers.
    pub fn ac_combi<P>(
        &self,
        profile: &P,
        candidate: &Bid,
        progress: &Progress,
        history: &OfferHistory,
        aggregate: Aggregate,
    ) -> Option<bool>
    where
        P: LinearAdditive,
    {
        let Range { start, end } = self.window(progress);
        let ref utilities = history
            .window(start, end)
            .iter()
            .map(|bid| profile.utility(bid))
            .collect::<Vec<_>>();
        aggregate
            .apply(utilities)
            .map(|target| profile.utility(candidate) >= target)
    }

    /// Should the candidate be accepted? Absent candidates never are.
    pub fn accepts<P>(
        &self,
        profile: &P,
        candidate: Option<&Bid>,
        reference: &Bid,
        progress: &Progress,
        history: &OfferHistory,
        aggregate: Aggregate,
    ) -> bool
    where
        P: LinearAdditive,
    {
        let Some(candidate) = candidate else {
            return false;
        };
        match self.criterion(progress) {
            Criterion::Next => self.ac_next(profile, candidate, reference),
            Criterion::Combined => {
                match self.ac_combi(profile, candidate, progress, history, aggregate) {
                    None => false,
                    Some(combi) => {
                        combi
                            && (self.ac_next(profile, candidate, reference)
                                || self.ac_time(progress))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use proptest::prelude::*;

    fn acceptance() -> Acceptance {
        Acceptance::new(&Config::default())
    }
    /// History of ladder steps, oldest first.
    fn history(steps: &[usize]) -> OfferHistory {
        let mut history = OfferHistory::default();
        steps.iter().copied().map(step).for_each(|b| history.push(b));
        history
    }

    #[test]
    fn first_half_uses_next_bid_criterion() {
        let acceptance = acceptance();
        let progress = Progress::new(10, 100);
        assert_eq!(progress.elapsed(), 9);
        assert_eq!(progress.span(), 99);
        assert_eq!(acceptance.criterion(&progress), Criterion::Next);
        assert_eq!(acceptance.criterion(&Progress::new(50, 100)), Criterion::Next);
        assert_eq!(acceptance.criterion(&Progress::new(51, 100)), Criterion::Combined);
    }

    #[test]
    fn next_bid_criterion_ignores_history() {
        let ref profile = ladder(&[9, 7, 5, 3]);
        let acceptance = acceptance();
        let ref empty = OfferHistory::default();
        let ref progress = Progress::new(10, 100);
        let ref reference = step(1);
        assert!(acceptance.accepts(profile, Some(&step(0)), reference, progress, empty, Aggregate::Mean));
        assert!(acceptance.accepts(profile, Some(&step(1)), reference, progress, empty, Aggregate::Mean));
        assert!(!acceptance.accepts(profile, Some(&step(2)), reference, progress, empty, Aggregate::Mean));
    }

    #[test]
    fn absent_candidate_is_rejected() {
        let ref profile = ladder(&[9]);
        assert!(!acceptance().accepts(
            profile,
            None,
            &step(0),
            &Progress::new(1, 100),
            &OfferHistory::default(),
            Aggregate::Mean
        ));
    }

    #[test]
    fn time_criterion_is_inclusive() {
        let acceptance = acceptance();
        // 98 < 0.99 * 99 = 98.01
        assert!(!acceptance.ac_time(&Progress::new(99, 100)));
        assert!(acceptance.ac_time(&Progress::new(100, 100)));
        // 99 >= 0.99 * 100
        assert!(acceptance.ac_time(&Progress::new(100, 101)));
    }

    #[test]
    fn window_is_clamped_at_zero() {
        let acceptance = acceptance();
        assert_eq!(acceptance.window(&Progress::new(61, 100)), 21..61);
        assert_eq!(acceptance.window(&Progress::new(100, 100)), 99..100);
        assert_eq!(acceptance.window(&Progress::new(0, 0)), 0..1);
        assert_eq!(acceptance.window(&Progress::new(3, 100)), 0..3);
    }

    #[test]
    fn empty_window_rejects_in_second_half() {
        let ref profile = ladder(&[9, 7, 5, 3]);
        let acceptance = acceptance();
        let ref progress = Progress::new(80, 100);
        // window starts at 59, history is shorter
        let ref history = history(&[3, 3, 3]);
        assert!(!acceptance.accepts(profile, Some(&step(0)), &step(3), progress, history, Aggregate::Mean));
    }

    #[test]
    fn combined_criterion_mean_versus_max() {
        let ref profile = ladder(&[9, 7, 5, 3]);
        let acceptance = acceptance();
        // elapsed 2, span 3: window [1, 3)
        let ref progress = Progress::new(3, 4);
        assert_eq!(acceptance.criterion(progress), Criterion::Combined);
        let ref history = history(&[0, 3, 0]);
        // window utilities 0.3, 0.9: mean 0.6, max 0.9
        let ref candidate = step(1);
        let ref reference = step(2);
        assert!(acceptance.accepts(profile, Some(candidate), reference, progress, history, Aggregate::Mean));
        assert!(!acceptance.accepts(profile, Some(candidate), reference, progress, history, Aggregate::Max));
    }

    #[test]
    fn combined_criterion_needs_next_or_time() {
        let ref profile = ladder(&[9, 7, 5, 3]);
        let acceptance = acceptance();
        let ref history = history(&[3; 200]);
        let ref candidate = step(2);
        let ref reference = step(1);
        // beats the window but not the reference, deadline far away
        assert!(!acceptance.accepts(profile, Some(candidate), reference, &Progress::new(60, 100), history, Aggregate::Mean));
        // same offer at the deadline
        assert!(acceptance.accepts(profile, Some(candidate), reference, &Progress::new(100, 100), history, Aggregate::Mean));
    }

    proptest! {
        #[test]
        fn accepts_is_pure(
            round in 0u32..120,
            duration in 0u32..120,
            steps in proptest::collection::vec(0usize..4, 0..120),
            candidate in 0usize..4,
            reference in 0usize..4,
            max in any::<bool>(),
        ) {
            let ref profile = ladder(&[9, 7, 5, 3]);
            let acceptance = acceptance();
            let ref history = history(&steps);
            let ref progress = Progress::new(round, duration);
            let aggregate = if max { Aggregate::Max } else { Aggregate::Mean };
            let first = acceptance.accepts(profile, Some(&step(candidate)), &step(reference), progress, history, aggregate);
            let again = acceptance.accepts(profile, Some(&step(candidate)), &step(reference), progress, &history.clone(), aggregate);
            prop_assert_eq!(first, again);
        }
    }
}
