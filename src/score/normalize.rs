use crate::error::ScoreError;

/// Min-max scale `raw` onto [0, 1], preserving order.
///
/// The smallest input maps to exactly 0 and the largest to exactly 1. When all
/// inputs are equal (including the single-region case) there is no spread to
/// scale by, and `DegenerateNormalization` is returned instead of NaN.
pub fn min_max_normalize(raw: &[f64]) -> Result<Vec<f64>, ScoreError> {
    if raw.is_empty() { return Err(ScoreError::EmptyInput) }

    if let Some(bad) = raw.iter().find(|v| !v.is_finite()) {
        return Err(ScoreError::MalformedInput(format!("raw weight {bad} is not finite")));
    }

    let (min, max) = raw.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let spread = max - min;
    if spread == 0.0 {
        return Err(ScoreError::DegenerateNormalization { value: min });
    }

    Ok(raw.iter().map(|&v| (v - min) / spread).collect())
}
