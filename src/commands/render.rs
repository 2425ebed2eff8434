use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::{Cli, RenderArgs};
use crate::{data, io, pipeline, render};
use super::load_inputs;

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let mut inputs = load_inputs(cli, &args.input)?;
    if let Some(out_dir) = &args.out_dir {
        inputs.config.output_dir = out_dir.clone();
    }
    let config = &inputs.config;

    let scores = pipeline::run(config, &inputs.boundaries, &inputs.table)?;

    // Every document is built in memory first; nothing touches the output dir until all succeed.
    let mut outputs: Vec<(PathBuf, String)> = vec![(
        config.web_map_path(),
        render::web_map_to_string(&inputs.boundaries, &scores, &config.name_property, &config.web_map)?,
    )];
    if !args.html_only {
        let series = match &args.turnout {
            Some(path) => io::csv::read_turnout_series(path)?,
            None => data::nyc_turnout(),
        };
        outputs.push((
            config.static_map_path(),
            render::static_map_to_string(&inputs.boundaries, &scores, &config.static_map)?,
        ));
        outputs.push((
            config.animation_path(),
            render::animated_map_to_string(&inputs.boundaries, &series, &config.animation)?,
        ));
        outputs.push((config.scores_path(), io::csv::write_scores_string(&scores)?));
    }

    io::fs::ensure_dir_exists(&config.output_dir)?;
    for (path, _) in &outputs {
        io::fs::check_output_path(path, args.force)?;
    }

    for (path, contents) in &outputs {
        io::fs::write_output(path, contents)?;
        info!(path = %path.display(), bytes = contents.len(), "wrote output");
    }
    for (path, _) in &outputs {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
