use tracing::debug;

use crate::{error::ScoreError, types::Region};
use super::{min_max_normalize, RegionScore, ScoreSet, ScoreWeights};

/// Composite score for one region before normalization.
pub fn raw_weight(region: &Region, weights: &ScoreWeights) -> f64 {
    let composite = region.unaffiliated_rate * weights.unaffiliated
        + region.under30_pct * weights.under30
        + region.college_edu_pct * weights.college
        + region.turnout_rate * weights.turnout;

    if weights.income_multiplier { composite * region.avg_income_k } else { composite }
}

/// Scores a fixed set of regions: raw composite per region, then min-max across the set.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    weights: ScoreWeights,
}

impl ScoreEngine {
    pub fn new(weights: ScoreWeights) -> Self { Self { weights } }

    #[inline]
    pub fn weights(&self) -> &ScoreWeights { &self.weights }

    #[inline]
    pub fn raw_weight(&self, region: &Region) -> f64 { raw_weight(region, &self.weights) }

    /// Score every region, returning one `RegionScore` per input in the same order.
    pub fn score(&self, regions: &[Region]) -> Result<ScoreSet, ScoreError> {
        if regions.is_empty() { return Err(ScoreError::EmptyInput) }
        self.weights.validate()?;
        for region in regions { region.validate()? }

        let raw = regions.iter().map(|r| self.raw_weight(r)).collect::<Vec<_>>();
        let normalized = min_max_normalize(&raw)?;

        let scores = regions.iter()
            .zip(raw.into_iter().zip(normalized))
            .map(|(region, (raw_weight, normalized_weight))| {
                debug!(region = %region.name, raw_weight, normalized_weight, "scored region");
                RegionScore { name: region.name.clone(), raw_weight, normalized_weight }
            })
            .collect();

        Ok(ScoreSet::new(scores))
    }
}
