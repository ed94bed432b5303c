//! Fan-out target selection across accounts, regions, and clusters.
//!
//! Requests name each dimension either concretely or with the ALL sentinel:
//!
//! | account | region | pairs queried |
//! |---------|--------|---------------|
//! | concrete | concrete | exactly that pair |
//! | concrete | ALL | every region of that account |
//! | ALL | concrete | every account present in that region |
//! | ALL | ALL | every account with every one of its regions |

use std::collections::{BTreeMap, BTreeSet};

use crate::models::OPTION_ALL;

/// Whether a dimension value is the ALL sentinel.
pub fn is_all(value: &str) -> bool {
    value.eq_ignore_ascii_case(OPTION_ALL)
}

/// One account/region combination to query.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Target {
    pub account: String,
    pub region: String,
}

impl Target {
    pub fn new(account: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            region: region.into(),
        }
    }
}

/// Known accounts and the regions each one is present in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Topology {
    accounts: BTreeMap<String, BTreeSet<String>>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account<I, S>(mut self, account: impl Into<String>, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_account(account, regions);
        self
    }

    pub fn add_account<I, S>(&mut self, account: impl Into<String>, regions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accounts
            .entry(account.into())
            .or_default()
            .extend(regions.into_iter().map(Into::into));
    }

    /// Known accounts, sorted.
    pub fn accounts(&self) -> Vec<String> {
        self.accounts.keys().cloned().collect()
    }

    /// Every region any account is present in, sorted and deduplicated.
    pub fn regions(&self) -> Vec<String> {
        self.accounts
            .values()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Account/region pairs to query for the requested dimensions.
    pub fn targets(&self, account: &str, region: &str) -> Vec<Target> {
        match (is_all(account), is_all(region)) {
            (false, false) => vec![Target::new(account, region)],
            (false, true) => self
                .accounts
                .get(account)
                .into_iter()
                .flatten()
                .map(|r| Target::new(account, r.as_str()))
                .collect(),
            (true, false) => self
                .accounts
                .iter()
                .filter(|(_, regions)| regions.contains(region))
                .map(|(a, _)| Target::new(a.as_str(), region))
                .collect(),
            (true, true) => self
                .accounts
                .iter()
                .flat_map(|(a, regions)| {
                    regions
                        .iter()
                        .map(move |r| Target::new(a.as_str(), r.as_str()))
                })
                .collect(),
        }
    }
}

/// Clientsets to query for the requested clientset.
pub fn expand_clientsets(known: &[String], requested: &str) -> Vec<String> {
    if is_all(requested) {
        known.to_vec()
    } else {
        vec![requested.to_string()]
    }
}
