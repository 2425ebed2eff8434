//! Strategic opportunity scoring: weighted composite per region, min-max across the set.

mod engine;
mod normalize;
mod weights;

use serde::Serialize;

pub use engine::{raw_weight, ScoreEngine};
pub use normalize::min_max_normalize;
pub use weights::ScoreWeights;

/// Score of a single region for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionScore {
    pub name: String,
    pub raw_weight: f64,
    pub normalized_weight: f64,
}

/// Every region's score from one run, in join order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreSet {
    scores: Vec<RegionScore>,
}

impl ScoreSet {
    pub(crate) fn new(scores: Vec<RegionScore>) -> Self { Self { scores } }

    #[inline]
    pub fn len(&self) -> usize { self.scores.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.scores.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &RegionScore> + '_ { self.scores.iter() }

    pub fn get(&self, name: &str) -> Option<&RegionScore> {
        self.scores.iter().find(|s| s.name == name)
    }

    /// Region with the highest normalized weight.
    pub fn top(&self) -> Option<&RegionScore> {
        self.scores.iter().max_by(|a, b| a.normalized_weight.total_cmp(&b.normalized_weight))
    }

    pub fn as_slice(&self) -> &[RegionScore] { &self.scores }

    pub fn into_vec(self) -> Vec<RegionScore> { self.scores }
}

impl<'a> IntoIterator for &'a ScoreSet {
    type Item = &'a RegionScore;
    type IntoIter = std::slice::Iter<'a, RegionScore>;

    fn into_iter(self) -> Self::IntoIter { self.scores.iter() }
}
