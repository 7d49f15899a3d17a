use crate::*;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

/// Frequency-counting opponent model.
///
/// An immutable snapshot of how often the opponent proposed each value of
/// each issue. Every observed proposal produces a new snapshot through
/// [`FrequencyModel::with_action`]; the receiver is never mutated, so an old
/// snapshot stays valid for whoever still holds it. `total` doubles as the
/// snapshot version.
///
/// The estimated opponent utility of a bid is the mean, over the domain's
/// issues, of the share of observations that picked the bid's value for that
/// issue. All issues weigh the same.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    domain: Option<Arc<Domain>>,
    frequencies: BTreeMap<Issue, BTreeMap<Value, u32>>,
    total: u32,
    reservation: Option<Bid>,
}

impl FrequencyModel {
    /// Fresh model with zero counts for every issue/value pair of the domain.
    /// May be called again to reset the model for a changed domain.
    pub fn with_domain(&self, domain: Domain, reservation: Option<Bid>) -> Self {
        let frequencies = domain
            .issues()
            .map(|issue| {
                let zeros = domain.values(issue).iter().cloned().map(|v| (v, 0)).collect();
                (issue.clone(), zeros)
            })
            .collect();
        Self {
            domain: Some(Arc::new(domain)),
            frequencies,
            total: 0,
            reservation,
        }
    }

    /// Snapshot with the action folded in.
    ///
    /// Non-proposals leave the counts untouched. A proposal bumps the count of
    /// every value it assigns and the total by one, however many issues it
    /// filled.
    pub fn with_action(&self, action: &Action, _: &Progress) -> Result<Self> {
        let domain = self
            .domain
            .as_ref()
            .ok_or(NegotiationError::UninitializedDomain)?;
        let bid = match action {
            Action::Offer { bid, .. } => bid,
            _ => return Ok(self.clone()),
        };
        let mut frequencies = self.frequencies.clone();
        domain
            .issues()
            .filter_map(|issue| bid.value(issue).map(|value| (issue, value)))
            .for_each(|(issue, value)| {
                *frequencies
                    .entry(issue.clone())
                    .or_default()
                    .entry(value.clone())
                    .or_default() += 1
            });
        Ok(Self {
            domain: Some(Arc::clone(domain)),
            frequencies,
            total: self.total + 1,
            reservation: self.reservation.clone(),
        })
    }

    /// Number of proposals folded into this snapshot.
    pub fn total(&self) -> u32 {
        self.total
    }
    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_deref()
    }
    pub fn reservation(&self) -> Option<&Bid> {
        self.reservation.as_ref()
    }

    /// Observed counts per value of an issue. Unknown issues have none.
    pub fn counts(&self, issue: &Issue) -> Result<BTreeMap<Value, u32>> {
        match self.domain {
            None => Err(NegotiationError::UninitializedDomain),
            Some(_) => Ok(self.frequencies.get(issue).cloned().unwrap_or_default()),
        }
    }

    /// Times the value was proposed for the issue.
    pub fn count(&self, issue: &Issue, value: &Value) -> u32 {
        self.frequencies
            .get(issue)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or_default()
    }

    /// Proposals that assigned any value to the issue.
    fn observed(&self, issue: &Issue) -> u32 {
        self.frequencies
            .get(issue)
            .map(|values| values.values().sum())
            .unwrap_or_default()
    }

    /// Share of the issue's observations that picked this value.
    ///
    /// Without evidence (no proposals at all, or none touching this issue)
    /// every value is assumed fully acceptable.
    pub fn fraction(&self, issue: &Issue, value: &Value) -> Utility {
        match (self.total, self.observed(issue)) {
            (0, _) | (_, 0) => Utility::ONE,
            (_, seen) => quantize(Utility::from(self.count(issue, value)) / Utility::from(seen)),
        }
    }

    /// Estimated opponent utility of a bid, in [0, 1].
    pub fn utility(&self, bid: &Bid) -> Result<Utility> {
        let domain = self
            .domain
            .as_ref()
            .ok_or(NegotiationError::UninitializedDomain)?;
        let issues = domain.issues().count();
        if self.total == 0 || issues == 0 {
            return Ok(Utility::ONE);
        }
        let sum = domain
            .issues()
            .filter_map(|issue| bid.value(issue).map(|value| self.fraction(issue, value)))
            .sum::<Utility>();
        Ok(quantize(sum / Utility::from(issues as u64)))
    }
}

impl PartialEq for FrequencyModel {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total
            && self.domain == other.domain
            && self.frequencies == other.frequencies
    }
}
impl Eq for FrequencyModel {}

impl Hash for FrequencyModel {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.frequencies.hash(state);
        self.domain.hash(state);
        self.total.hash(state);
    }
}

impl std::fmt::Display for FrequencyModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "FrequencyModel[{},", self.total)?;
        for (issue, values) in self.frequencies.iter() {
            write!(f, " {}:", issue)?;
            for (value, count) in values.iter() {
                write!(f, " {}x{}", value, count)?;
            }
        }
        write!(f, "]")
    }
}
