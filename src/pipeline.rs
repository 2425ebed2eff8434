use tracing::info;

use crate::{
    config::Config,
    error::ScoreError,
    join::join,
    score::{ScoreEngine, ScoreSet},
    types::{AttributeTable, BoundarySet},
};

/// Join the attribute table onto the boundaries and score every region.
///
/// Performs no file I/O and draws nothing; loading inputs and rendering outputs
/// are the caller's business.
pub fn run(config: &Config, boundaries: &BoundarySet, table: &AttributeTable) -> Result<ScoreSet, ScoreError> {
    let regions = join(boundaries, table)?;
    let scores = ScoreEngine::new(config.weights).score(&regions)?;

    if let Some(top) = scores.top() {
        info!(regions = scores.len(), top = %top.name, raw_weight = top.raw_weight, "scored regions");
    }
    Ok(scores)
}
