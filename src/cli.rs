use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Strategic opportunity scoring for NYC boroughs (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "civicscope", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON config file (weights, join key, map styling, output paths)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every region and print the table to stdout
    Score(ScoreArgs),

    /// Score every region and write the static, web and animated maps
    Render(RenderArgs),
}

/// Inputs shared by every command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Boundary file (GeoJSON FeatureCollection of named polygons)
    #[arg(value_hint = ValueHint::FilePath)]
    pub boundaries: PathBuf,

    /// Attribute table CSV; the built-in NYC figures are used when omitted
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Feature property holding the region name (overrides the config file)
    #[arg(long)]
    pub name_property: Option<String>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum ScoreFormat { Table, Json, Csv }

#[derive(Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ScoreFormat::Table)]
    pub format: ScoreFormat,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (overrides the config file)
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// Overwrite output files that already exist
    #[arg(long)]
    pub force: bool,

    /// Write only the interactive web map
    #[arg(long)]
    pub html_only: bool,

    /// Turnout series CSV (borough, year, turnout); the built-in 2021–2024 NYC series is used when omitted
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "html_only")]
    pub turnout: Option<PathBuf>,
}
