use super::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// An assignment of values to issues.
///
/// Bids enumerated from a [`Domain`] are complete. Bids received from other
/// parties may be partial; a missing issue simply has no value.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bid(BTreeMap<Issue, Value>);

impl Bid {
    pub fn value(&self, issue: &Issue) -> Option<&Value> {
        self.0.get(issue)
    }
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.0.keys()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Issue, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(Issue, Value)> for Bid {
    fn from_iter<I: IntoIterator<Item = (Issue, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `issue=value` pairs separated by commas, e.g. `color=red,size=2`
impl TryFrom<&str> for Bid {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((issue, value)) => Ok((Issue::from(issue.trim()), value.parse::<Value>()?)),
                None => Err(anyhow::anyhow!("bid pair missing '=': {}", pair)),
            })
            .collect()
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (issue, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", issue, value)?;
        }
        write!(f, "}}")
    }
}
