use std::collections::{BTreeMap, BTreeSet};

/// Year-indexed turnout observations per region, used by the animated map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnoutSeries {
    by_region: BTreeMap<String, BTreeMap<u16, f64>>,
}

impl TurnoutSeries {
    pub fn new() -> Self { Self::default() }

    /// Record one observation, returning the value it replaced for the same (region, year).
    pub fn insert(&mut self, region: impl Into<String>, year: u16, turnout: f64) -> Option<f64> {
        self.by_region.entry(region.into()).or_default().insert(year, turnout)
    }

    /// All years that appear for any region, ascending.
    pub fn years(&self) -> Vec<u16> {
        self.by_region.values()
            .flat_map(|years| years.keys().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn turnout(&self, region: &str, year: u16) -> Option<f64> {
        self.by_region.get(region)?.get(&year).copied()
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.by_region.contains_key(region)
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_region.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool { self.by_region.is_empty() }

    /// Smallest and largest turnout over every observation.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.by_region.values()
            .flat_map(|years| years.values().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
