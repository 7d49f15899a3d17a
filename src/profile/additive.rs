use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Linear-additive profile: issue weights and per-issue value utilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditiveProfile {
    name: String,
    domain: Domain,
    weights: BTreeMap<Issue, Utility>,
    utilities: BTreeMap<Issue, BTreeMap<Value, Utility>>,
    reservation: Option<Bid>,
}

impl AdditiveProfile {
    pub fn new(
        name: impl Into<String>,
        domain: Domain,
        weights: BTreeMap<Issue, Utility>,
        utilities: BTreeMap<Issue, BTreeMap<Value, Utility>>,
        reservation: Option<Bid>,
    ) -> Self {
        Self {
            name: name.into(),
            domain,
            weights,
            utilities,
            reservation,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Random weights and value utilities for simulations and tests.
    ///
    /// Weights are drawn in hundredths and normalized so they sum to one;
    /// value utilities are drawn in hundredths from [0, 1].
    pub fn random(name: impl Into<String>, domain: &Domain, rng: &mut impl Rng) -> Self {
        let issues = domain.issues().cloned().collect::<Vec<_>>();
        let ref draws = issues
            .iter()
            .map(|_| Utility::from(rng.random_range(1..=100u32)))
            .collect::<Vec<_>>();
        let total = draws.iter().copied().sum::<Utility>();
        let weights = issues
            .iter()
            .cloned()
            .zip(draws.iter().map(|w| *w / total))
            .collect();
        let utilities = issues
            .iter()
            .map(|issue| {
                let values = domain
                    .values(issue)
                    .iter()
                    .cloned()
                    .map(|v| (v, Utility::new(rng.random_range(0..=100), 2)))
                    .collect();
                (issue.clone(), values)
            })
            .collect();
        Self::new(name, domain.clone(), weights, utilities, None)
    }
}

impl UtilitySpace for AdditiveProfile {
    fn domain(&self) -> &Domain {
        &self.domain
    }
    fn utility(&self, bid: &Bid) -> Utility {
        self.additive(bid)
    }
    fn reservation(&self) -> Option<&Bid> {
        self.reservation.as_ref()
    }
}

impl LinearAdditive for AdditiveProfile {
    fn weight(&self, issue: &Issue) -> Utility {
        self.weights.get(issue).copied().unwrap_or_default()
    }
    fn evaluate(&self, issue: &Issue, value: &Value) -> Utility {
        self.utilities
            .get(issue)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or_default()
    }
}
