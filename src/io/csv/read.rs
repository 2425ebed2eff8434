//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReader, DataType}};
use tracing::info;

use crate::{error::ScoreError, types::{AttributeTable, Region, TurnoutSeries}};

/// Column holding the region name in attribute tables.
pub(crate) const NAME_COLUMN: &str = "borough";

/// Reads a CSV file from `path` into a Polars DataFrame.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReader::new(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(csv.as_bytes()))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")
}

/// Load an attribute table from a CSV file with a `borough` column and the five numeric columns.
pub fn read_attribute_table(path: &Path) -> Result<AttributeTable> {
    if !path.is_file() {
        return Err(ScoreError::MissingInputFile(path.to_path_buf()).into());
    }
    let table = attribute_table_from_frame(&read_csv(path)?)
        .with_context(|| format!("[io::csv::read] Invalid attribute table in {}", path.display()))?;
    info!(path = %path.display(), rows = table.len(), "loaded attribute table");
    Ok(table)
}

/// Convert a DataFrame into an attribute table; integer columns are widened to f64.
pub(crate) fn attribute_table_from_frame(df: &DataFrame) -> Result<AttributeTable> {
    let names = string_column(df, NAME_COLUMN)?;

    let turnout = float_column(df, "turnout_rate")?;
    let unaffiliated = float_column(df, "unaffiliated_rate")?;
    let under30 = float_column(df, "under30_pct")?;
    let college = float_column(df, "college_edu_pct")?;
    let income = float_column(df, "avg_income_k")?;

    let rows = names.into_iter().enumerate()
        .map(|(i, name)| Region::new(name, turnout[i], unaffiliated[i], under30[i], college[i], income[i]))
        .collect();

    Ok(AttributeTable::new(rows)?)
}

/// Load a turnout series from a CSV with `borough`, `year` and `turnout` columns.
pub fn read_turnout_series(path: &Path) -> Result<TurnoutSeries> {
    if !path.is_file() {
        return Err(ScoreError::MissingInputFile(path.to_path_buf()).into());
    }
    let series = turnout_series_from_frame(&read_csv(path)?)
        .with_context(|| format!("[io::csv::read] Invalid turnout series in {}", path.display()))?;
    info!(path = %path.display(), years = series.years().len(), "loaded turnout series");
    Ok(series)
}

pub(crate) fn turnout_series_from_frame(df: &DataFrame) -> Result<TurnoutSeries> {
    let names = string_column(df, NAME_COLUMN)?;
    let years = float_column(df, "year")?;
    let turnout = float_column(df, "turnout")?;

    let mut series = TurnoutSeries::new();
    for (row, name) in names.into_iter().enumerate() {
        let year = years[row];
        if year.fract() != 0.0 || !(0.0..=u16::MAX as f64).contains(&year) {
            return Err(ScoreError::MalformedInput(format!("row {row} has invalid year {year}")).into());
        }
        let year = year as u16;
        if series.insert(name.as_str(), year, turnout[row]).is_some() {
            return Err(ScoreError::MalformedInput(format!("row {row} repeats {year} turnout for {name}")).into());
        }
    }
    Ok(series)
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)
        .map_err(|_| ScoreError::MalformedInput(format!("missing column {name:?}")))?
        .cast(&DataType::String)?;
    let values = column.str()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.map(|v| v.trim().to_string())
                .ok_or_else(|| ScoreError::MalformedInput(format!("row {row} has no {name}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(values)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)
        .map_err(|_| ScoreError::MalformedInput(format!("missing column {name:?}")))?
        .cast(&DataType::Float64)
        .with_context(|| format!("[io::csv::read] Column {name:?} is not numeric"))?;

    column.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| anyhow::Error::from(ScoreError::MalformedInput(format!("row {row} has no {name}"))))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
borough,turnout_rate,unaffiliated_rate,under30_pct,college_edu_pct,avg_income_k
Bronx,0.191,0.21,0.31,0.30,47
Manhattan,0.334,0.22,0.26,0.65,100
";

    #[test]
    fn reads_rows_and_widens_integers() {
        let df = read_csv_string(TABLE).unwrap();
        let table = attribute_table_from_frame(&df).unwrap();
        assert_eq!(table.len(), 2);
        let bronx = table.get("Bronx").unwrap();
        assert_eq!(bronx.avg_income_k, 47.0);
        assert_eq!(bronx.turnout_rate, 0.191);
    }

    #[test]
    fn missing_column_is_malformed() {
        let df = read_csv_string("borough,turnout_rate\nBronx,0.1\n").unwrap();
        let err = attribute_table_from_frame(&df).unwrap_err();
        assert!(matches!(err.downcast_ref::<ScoreError>(), Some(ScoreError::MalformedInput(_))));
    }

    #[test]
    fn duplicate_rows_are_rejected() {
        let csv = format!("{TABLE}Bronx,0.2,0.2,0.3,0.3,50\n");
        let df = read_csv_string(&csv).unwrap();
        let err = attribute_table_from_frame(&df).unwrap_err();
        assert!(matches!(err.downcast_ref::<ScoreError>(), Some(ScoreError::DuplicateRegion(..))));
    }

    #[test]
    fn reads_long_format_turnout() {
        let df = read_csv_string("borough,year,turnout\nBronx,2021,0.19\nBronx,2022,0.20\nQueens,2021,0.25\n").unwrap();
        let series = turnout_series_from_frame(&df).unwrap();
        assert_eq!(series.years(), vec![2021, 2022]);
        assert_eq!(series.turnout("Bronx", 2022), Some(0.20));
        assert_eq!(series.turnout("Queens", 2022), None);
    }

    #[test]
    fn repeated_region_year_is_rejected() {
        let df = read_csv_string("borough,year,turnout\nBronx,2021,0.19\nBronx,2021,0.90\n").unwrap();
        let err = turnout_series_from_frame(&df).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ScoreError>(),
            Some(&ScoreError::MalformedInput("row 1 repeats 2021 turnout for Bronx".into())),
        );
    }

    #[test]
    fn fractional_year_is_rejected() {
        let df = read_csv_string("borough,year,turnout\nBronx,2021.5,0.19\n").unwrap();
        assert!(turnout_series_from_frame(&df).is_err());
    }
}
