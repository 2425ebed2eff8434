//! Built-in NYC borough figures (2021–2024 estimates).

use crate::types::{AttributeTable, Region, TurnoutSeries};

pub const BOROUGHS: [&str; 5] = ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"];

/// Turnout, party unaffiliation, under-30 share, college share, and mean income ($k) per borough.
const ATTRIBUTES: [(&str, f64, f64, f64, f64, f64); 5] = [
    ("Bronx",         0.191, 0.21, 0.31, 0.30,  47.0),
    ("Brooklyn",      0.275, 0.19, 0.29, 0.45,  75.0),
    ("Manhattan",     0.334, 0.22, 0.26, 0.65, 100.0),
    ("Queens",        0.250, 0.20, 0.28, 0.40,  82.0),
    ("Staten Island", 0.224, 0.18, 0.25, 0.38,  96.0),
];

pub const TURNOUT_YEARS: [u16; 4] = [2021, 2022, 2023, 2024];

/// Per-borough turnout for each of `TURNOUT_YEARS`, in `BOROUGHS` order.
const TURNOUT: [[f64; 4]; 5] = [
    [0.19, 0.20, 0.22, 0.24],
    [0.27, 0.28, 0.30, 0.32],
    [0.33, 0.34, 0.35, 0.36],
    [0.25, 0.26, 0.27, 0.29],
    [0.22, 0.23, 0.24, 0.26],
];

pub fn nyc_attributes() -> AttributeTable {
    let rows = ATTRIBUTES.iter()
        .map(|&(name, turnout, unaffiliated, under30, college, income)| {
            Region::new(name, turnout, unaffiliated, under30, college, income)
        })
        .collect();
    AttributeTable::new(rows).expect("ATTRIBUTES has one row per borough")
}

pub fn nyc_turnout() -> TurnoutSeries {
    let mut series = TurnoutSeries::new();
    for (borough, values) in BOROUGHS.iter().zip(TURNOUT.iter()) {
        for (&year, &turnout) in TURNOUT_YEARS.iter().zip(values.iter()) {
            series.insert(*borough, year, turnout);
        }
    }
    series
}
