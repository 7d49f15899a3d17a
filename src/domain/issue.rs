use serde::Deserialize;
use serde::Serialize;

/// A named dimension of a bid.
///
/// Ordering is lexicographic on the name, which fixes the issue order of a
/// [`super::Domain`] and therefore its bid enumeration order.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Issue(String);

impl Issue {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Issue {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
impl From<String> for Issue {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
