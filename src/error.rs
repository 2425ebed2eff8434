use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a scoring run.
///
/// None of these are recovered from: a partial or wrong score set would
/// misrepresent every map drawn from it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("input file not found: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("region names do not match between boundaries and attribute table (missing in table: [{}]; missing in boundaries: [{}])",
        .missing_in_table.join(", "), .missing_in_boundaries.join(", "))]
    JoinMismatch {
        missing_in_table: Vec<String>,
        missing_in_boundaries: Vec<String>,
    },

    #[error("no regions to score")]
    EmptyInput,

    #[error("cannot normalize: every region has the same raw weight ({value})")]
    DegenerateNormalization { value: f64 },

    #[error("region {0:?} appears more than once in {1}")]
    DuplicateRegion(String, &'static str),

    #[error("region {region:?} has a non-finite {field}")]
    InvalidAttribute { region: String, field: &'static str },

    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl ScoreError {
    /// Builds a join mismatch with both name lists sorted for stable messages.
    pub(crate) fn join_mismatch(mut missing_in_table: Vec<String>, mut missing_in_boundaries: Vec<String>) -> Self {
        missing_in_table.sort();
        missing_in_boundaries.sort();
        Self::JoinMismatch { missing_in_table, missing_in_boundaries }
    }
}
