use super::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The issue set of a negotiation and the admissible values of each issue.
///
/// The bid space is the cartesian product of the value sets. Enumeration is
/// mixed-radix over issues in name order, with the last issue varying
/// fastest, so every party sees the same bid sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    name: String,
    issues: BTreeMap<Issue, Vec<Value>>,
}

impl Domain {
    pub fn new(name: impl Into<String>, issues: BTreeMap<Issue, Vec<Value>>) -> Self {
        Self {
            name: name.into(),
            issues,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.keys()
    }
    /// Admissible values of an issue, empty for unknown issues.
    pub fn values(&self, issue: &Issue) -> &[Value] {
        self.issues.get(issue).map(Vec::as_slice).unwrap_or_default()
    }
    pub fn contains(&self, issue: &Issue) -> bool {
        self.issues.contains_key(issue)
    }
    /// Number of bids in the space. One for an issueless domain,
    /// `None` when the count overflows `usize`.
    pub fn size(&self) -> Option<usize> {
        self.issues
            .values()
            .map(Vec::len)
            .try_fold(1usize, |n, len| n.checked_mul(len))
    }
    /// Every complete bid, in enumeration order.
    /// Nothing when the space is too large to count.
    pub fn bids(&self) -> impl Iterator<Item = Bid> + '_ {
        (0..self.size().unwrap_or_default()).map(move |i| self.nth(i))
    }
    /// Decode the i-th bid of the enumeration.
    fn nth(&self, mut i: usize) -> Bid {
        let mut pairs = Vec::with_capacity(self.issues.len());
        for (issue, values) in self.issues.iter().rev() {
            pairs.push((issue.clone(), values[i % values.len()].clone()));
            i /= values.len();
        }
        pairs.into_iter().collect()
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for (issue, values) in self.issues.iter() {
            write!(f, " {}[{}]", issue, values.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> Domain {
        Domain::new(
            "party",
            [
                ("color", vec!["red", "blue"]),
                ("food", vec!["pizza", "sushi", "tacos"]),
            ]
            .into_iter()
            .map(|(i, vs)| (Issue::from(i), vs.into_iter().map(Value::from).collect()))
            .collect(),
        )
    }

    #[test]
    fn enumerates_cartesian_product() {
        let domain = domain();
        let bids = domain.bids().collect::<Vec<_>>();
        assert_eq!(domain.size(), Some(6));
        assert_eq!(bids.len(), 6);
        assert_eq!(
            bids.iter().collect::<std::collections::BTreeSet<_>>().len(),
            6
        );
        assert!(bids.iter().all(|b| b.len() == 2));
    }

    #[test]
    fn enumeration_order_is_mixed_radix() {
        let bids = domain().bids().collect::<Vec<_>>();
        assert_eq!(bids[0], Bid::try_from("color=red,food=pizza").unwrap());
        assert_eq!(bids[1], Bid::try_from("color=red,food=sushi").unwrap());
        assert_eq!(bids[3], Bid::try_from("color=blue,food=pizza").unwrap());
    }

    #[test]
    fn issueless_domain_has_one_empty_bid() {
        let domain = Domain::new("empty", BTreeMap::new());
        let bids = domain.bids().collect::<Vec<_>>();
        assert_eq!(bids, vec![Bid::default()]);
    }

    #[test]
    fn valueless_issue_empties_the_space() {
        let domain = Domain::new(
            "broken",
            [(Issue::from("color"), vec![])].into_iter().collect(),
        );
        assert_eq!(domain.size(), Some(0));
        assert_eq!(domain.bids().count(), 0);
    }

    #[test]
    fn oversized_space_has_no_size() {
        let values = (0..10).map(|v| Value::from(format!("v{}", v).as_str())).collect::<Vec<_>>();
        let domain = Domain::new(
            "huge",
            (0..20)
                .map(|i| (Issue::from(format!("i{}", i)), values.clone()))
                .collect(),
        );
        assert_eq!(domain.size(), None);
        assert_eq!(domain.bids().count(), 0);
    }
}
