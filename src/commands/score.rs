use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::{Cli, ScoreArgs, ScoreFormat};
use crate::{io, pipeline, score::ScoreSet};
use super::load_inputs;

pub fn run(cli: &Cli, args: &ScoreArgs) -> Result<()> {
    let inputs = load_inputs(cli, &args.input)?;
    let scores = pipeline::run(&inputs.config, &inputs.boundaries, &inputs.table)?;

    let text = format_scores(&scores, args.format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("[score] Failed to write to stdout")?;
    stdout.flush()?;
    Ok(())
}

pub(crate) fn format_scores(scores: &ScoreSet, format: ScoreFormat) -> Result<String> {
    match format {
        ScoreFormat::Table => Ok(format_table(scores)),
        ScoreFormat::Json => {
            let mut json = serde_json::to_string_pretty(scores).context("[score] Failed to serialize scores")?;
            json.push('\n');
            Ok(json)
        }
        ScoreFormat::Csv => io::csv::write_scores_string(scores),
    }
}

fn format_table(scores: &ScoreSet) -> String {
    let width = scores.iter().map(|s| s.name.len()).max().unwrap_or(0).max("Region".len());
    let mut out = format!("{:<width$}  {:>10}  {:>6}\n", "Region", "Raw weight", "Index");
    for score in scores {
        out.push_str(&format!("{:<width$}  {:>10.3}  {:>6.3}\n", score.name, score.raw_weight, score.normalized_weight));
    }
    out
}
