use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// An atomic value assignable to one issue.
///
/// Discrete values are labels ("red", "blue"); numeric values come from
/// number-valued issues and compare by magnitude.
///
/// The JSON form is untagged and numbers are tried first, so a label that
/// reads as a number (`"1"`) comes back as [`Value::Number`]. Domains should
/// not mix numeric-looking labels with numeric values on one issue.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(Utility),
    Discrete(String),
}

/// Always a label, even if it reads as a number. See [`std::str::FromStr`].
impl From<&str> for Value {
    fn from(label: &str) -> Self {
        Self::Discrete(label.to_string())
    }
}
impl From<Utility> for Value {
    fn from(n: Utility) -> Self {
        Self::Number(n)
    }
}

/// numbers parse as numbers, anything else is a label
impl std::str::FromStr for Value {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(anyhow::anyhow!("empty value string")),
            t => Ok(t
                .parse::<Utility>()
                .map(Self::Number)
                .unwrap_or_else(|_| Self::Discrete(t.to_string()))),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Discrete(s) => write!(f, "\"{}\"", s),
        }
    }
}
