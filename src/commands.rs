use anyhow::Result;
use tracing::debug;

use crate::cli::{Cli, InputArgs};
use crate::{config::Config, data, io, types::{AttributeTable, BoundarySet}};

pub mod render;
pub mod score;

/// Everything a command needs before scoring: resolved config, outlines, attribute rows.
pub(crate) struct Inputs {
    pub(crate) config: Config,
    pub(crate) boundaries: BoundarySet,
    pub(crate) table: AttributeTable,
}

/// Resolve the config (file, then CLI overrides) and load both inputs.
pub(crate) fn load_inputs(cli: &Cli, input: &InputArgs) -> Result<Inputs> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(name_property) = &input.name_property {
        config.name_property = name_property.clone();
    }
    config.validate()?;

    let boundaries = io::geojson::read_boundaries(&input.boundaries, &config.name_property)?;
    let table = match &input.data {
        Some(path) => io::csv::read_attribute_table(path)?,
        None => {
            debug!("using built-in NYC attribute table");
            data::nyc_attributes()
        }
    };

    Ok(Inputs { config, boundaries, table })
}
