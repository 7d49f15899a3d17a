//! Shared builders for unit tests.
use crate::*;
use std::collections::BTreeMap;

/// Discrete domain from `(issue, [values])` pairs.
pub fn domain(name: &str, issues: &[(&str, &[&str])]) -> Domain {
    Domain::new(
        name,
        issues
            .iter()
            .map(|(issue, values)| {
                (
                    Issue::from(*issue),
                    values.iter().copied().map(Value::from).collect(),
                )
            })
            .collect(),
    )
}

/// One issue `x` with values `v0, v1, ...` worth the given tenths,
/// full weight on the issue.
pub fn ladder(tenths: &[i64]) -> AdditiveProfile {
    let ref x = Issue::from("x");
    let values = tenths
        .iter()
        .enumerate()
        .map(|(i, u)| (rung(i), Utility::new(*u, 1)))
        .collect::<BTreeMap<_, _>>();
    let domain = Domain::new(
        "ladder",
        [(x.clone(), values.keys().cloned().collect())]
            .into_iter()
            .collect(),
    );
    AdditiveProfile::new(
        "ladder",
        domain,
        [(x.clone(), Utility::ONE)].into_iter().collect(),
        [(x.clone(), values)].into_iter().collect(),
        None,
    )
}

/// The i-th value of a [`ladder`] profile as a single-issue bid.
pub fn step(i: usize) -> Bid {
    [(Issue::from("x"), rung(i))].into_iter().collect()
}

fn rung(i: usize) -> Value {
    Value::from(format!("v{}", i).as_str())
}

/// Profile over a domain without issues: exactly one empty bid.
pub fn issueless() -> AdditiveProfile {
    AdditiveProfile::new(
        "none",
        Domain::new("none", BTreeMap::new()),
        BTreeMap::new(),
        BTreeMap::new(),
        None,
    )
}

pub fn tenths(n: i64) -> Utility {
    Utility::new(n, 1)
}
