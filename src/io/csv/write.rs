//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::score::ScoreSet;
use super::NAME_COLUMN;

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Write a DataFrame to a CSV string.
pub(crate) fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .finish(df)
        .context("[io::csv::write] Failed to write CSV to string")?;
    String::from_utf8(buffer)
        .context("[io::csv::write] CSV output is not valid UTF-8")
}

fn scores_frame(scores: &ScoreSet) -> Result<DataFrame> {
    let names = scores.iter().map(|s| s.name.clone()).collect::<Vec<_>>();
    let raw = scores.iter().map(|s| s.raw_weight).collect::<Vec<_>>();
    let normalized = scores.iter().map(|s| s.normalized_weight).collect::<Vec<_>>();

    Ok(DataFrame::new(vec![
        Series::new(NAME_COLUMN.into(), names).into(),
        Series::new("raw_weight".into(), raw).into(),
        Series::new("normalized_weight".into(), normalized).into(),
    ])?)
}

/// Write one row per region: name, raw weight, normalized weight.
pub fn write_scores(scores: &ScoreSet, path: &Path) -> Result<()> {
    write_csv(&mut scores_frame(scores)?, path)
}

/// Same layout as `write_scores`, returned as a string.
pub fn write_scores_string(scores: &ScoreSet) -> Result<String> {
    write_csv_string(&mut scores_frame(scores)?)
}
