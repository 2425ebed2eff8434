use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// One row of the attribute table: a borough and its demographic/turnout figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub turnout_rate: f64,
    pub unaffiliated_rate: f64,
    pub under30_pct: f64,
    pub college_edu_pct: f64,
    pub avg_income_k: f64,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        turnout_rate: f64,
        unaffiliated_rate: f64,
        under30_pct: f64,
        college_edu_pct: f64,
        avg_income_k: f64,
    ) -> Self {
        Self { name: name.into(), turnout_rate, unaffiliated_rate, under30_pct, college_edu_pct, avg_income_k }
    }

    /// Reject rows carrying NaN or infinite values.
    pub(crate) fn validate(&self) -> Result<(), ScoreError> {
        let fields = [
            ("turnout_rate", self.turnout_rate),
            ("unaffiliated_rate", self.unaffiliated_rate),
            ("under30_pct", self.under30_pct),
            ("college_edu_pct", self.college_edu_pct),
            ("avg_income_k", self.avg_income_k),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(field, _)) => Err(ScoreError::InvalidAttribute { region: self.name.clone(), field }),
            None => Ok(()),
        }
    }
}

/// Attribute rows keyed by unique region name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeTable {
    rows: Vec<Region>,
}

impl AttributeTable {
    /// Build a table, failing if any name appears twice.
    pub fn new(rows: Vec<Region>) -> Result<Self, ScoreError> {
        for (i, row) in rows.iter().enumerate() {
            if rows[..i].iter().any(|other| other.name == row.name) {
                return Err(ScoreError::DuplicateRegion(row.name.clone(), "attribute table"));
            }
        }
        Ok(Self { rows })
    }

    #[inline]
    pub fn len(&self) -> usize { self.rows.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.rows.iter().find(|row| row.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|row| row.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> + '_ {
        self.rows.iter()
    }
}
