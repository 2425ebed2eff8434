use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use civicscope::cli::{Cli, Commands};
use civicscope::commands::{render, score};
use civicscope::{data, ScoreError};

fn write_boroughs(dir: &Path) -> PathBuf {
    let features = data::BOROUGHS.iter().enumerate()
        .map(|(i, name)| {
            let x = -74.2 + i as f64 * 0.1;
            serde_json::json!({
                "type": "Feature",
                "properties": { "BoroName": name },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[x, 40.6], [x + 0.08, 40.6], [x + 0.08, 40.7], [x, 40.7], [x, 40.6]]],
                },
            })
        })
        .collect::<Vec<_>>();
    let path = dir.join("boroughs.geojson");
    let collection = serde_json::json!({ "type": "FeatureCollection", "features": features });
    fs::write(&path, serde_json::to_vec(&collection).unwrap()).unwrap();
    path
}

fn run_cli(args: &[&str]) -> anyhow::Result<()> {
    let cli = Cli::parse_from(std::iter::once("civicscope").chain(args.iter().copied()));
    match &cli.command {
        Commands::Score(args) => score::run(&cli, args),
        Commands::Render(args) => render::run(&cli, args),
    }
}

fn listing(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else { return Vec::new() };
    let mut names = entries
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[test]
fn render_writes_all_four_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let boundaries = write_boroughs(tmp.path());
    let out = tmp.path().join("out");

    run_cli(&["render", boundaries.to_str().unwrap(), "--out-dir", out.to_str().unwrap()]).unwrap();

    assert_eq!(listing(&out), vec![
        "nyc-opportunity.svg", "nyc-turnout-animated.svg", "nyc-vote-heatmap.html", "scores.csv",
    ]);
}

#[test]
fn failed_turnout_load_leaves_no_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let boundaries = write_boroughs(tmp.path());
    let out = tmp.path().join("out");
    let missing = tmp.path().join("no-turnout.csv");

    let err = run_cli(&[
        "render", boundaries.to_str().unwrap(),
        "--out-dir", out.to_str().unwrap(),
        "--turnout", missing.to_str().unwrap(),
    ]).unwrap_err();
    assert_eq!(err.downcast_ref::<ScoreError>(), Some(&ScoreError::MissingInputFile(missing)));
    assert!(listing(&out).is_empty());

    // A clean rerun is not blocked by leftovers.
    run_cli(&["render", boundaries.to_str().unwrap(), "--out-dir", out.to_str().unwrap()]).unwrap();
    assert_eq!(listing(&out).len(), 4);
}

#[test]
fn turnout_without_every_borough_leaves_no_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let boundaries = write_boroughs(tmp.path());
    let out = tmp.path().join("out");
    let turnout = tmp.path().join("turnout.csv");
    fs::write(&turnout, "borough,year,turnout\nBronx,2021,0.19\nManhattan,2021,0.33\n").unwrap();

    let err = run_cli(&[
        "render", boundaries.to_str().unwrap(),
        "--out-dir", out.to_str().unwrap(),
        "--turnout", turnout.to_str().unwrap(),
    ]).unwrap_err();
    assert!(matches!(err.downcast_ref::<ScoreError>(), Some(ScoreError::JoinMismatch { .. })));
    assert!(listing(&out).is_empty());
}

#[test]
fn html_only_writes_just_the_web_map() {
    let tmp = tempfile::tempdir().unwrap();
    let boundaries = write_boroughs(tmp.path());
    let out = tmp.path().join("out");

    run_cli(&["render", boundaries.to_str().unwrap(), "--out-dir", out.to_str().unwrap(), "--html-only"]).unwrap();

    assert_eq!(listing(&out), vec!["nyc-vote-heatmap.html"]);
}

#[test]
fn existing_outputs_block_render_without_force() {
    let tmp = tempfile::tempdir().unwrap();
    let boundaries = write_boroughs(tmp.path());
    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("scores.csv"), "keep me").unwrap();

    assert!(run_cli(&["render", boundaries.to_str().unwrap(), "--out-dir", out.to_str().unwrap()]).is_err());
    assert_eq!(listing(&out), vec!["scores.csv"]);
    assert_eq!(fs::read_to_string(out.join("scores.csv")).unwrap(), "keep me");

    run_cli(&["render", boundaries.to_str().unwrap(), "--out-dir", out.to_str().unwrap(), "--force"]).unwrap();
    assert_eq!(listing(&out).len(), 4);
    assert!(fs::read_to_string(out.join("scores.csv")).unwrap().starts_with("borough,"));
}

#[test]
fn score_reports_join_mismatch() {
    let tmp = tempfile::tempdir().unwrap();
    let boundaries = write_boroughs(tmp.path());
    let data = tmp.path().join("attributes.csv");
    fs::write(&data, "\
borough,turnout_rate,unaffiliated_rate,under30_pct,college_edu_pct,avg_income_k
Bronx,0.191,0.21,0.31,0.30,47
Manhattan,0.334,0.22,0.26,0.65,100
").unwrap();

    let err = run_cli(&["score", boundaries.to_str().unwrap(), "--data", data.to_str().unwrap()]).unwrap_err();
    assert_eq!(err.downcast_ref::<ScoreError>(), Some(&ScoreError::JoinMismatch {
        missing_in_table: vec!["Brooklyn".into(), "Queens".into(), "Staten Island".into()],
        missing_in_boundaries: vec![],
    }));
}

#[test]
fn score_succeeds_on_builtin_table() {
    let tmp = tempfile::tempdir().unwrap();
    let boundaries = write_boroughs(tmp.path());
    run_cli(&["score", boundaries.to_str().unwrap(), "--format", "json"]).unwrap();
}
