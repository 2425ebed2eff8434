use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Coefficients of the strategic opportunity formula.
///
/// `raw = (unaffiliated*u + under30*y + college*c + turnout*t) * income`,
/// where the trailing income factor applies only when `income_multiplier` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub unaffiliated: f64,
    pub under30: f64,
    pub college: f64,
    pub turnout: f64,
    pub income_multiplier: bool,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { unaffiliated: 0.4, under30: 0.3, college: 0.2, turnout: 0.1, income_multiplier: true }
    }
}

impl ScoreWeights {
    /// Every coefficient must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ScoreError> {
        let coefficients = [
            ("unaffiliated", self.unaffiliated),
            ("under30", self.under30),
            ("college", self.college),
            ("turnout", self.turnout),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::MalformedInput(format!(
                    "weight {name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
