//! Run configuration: score weights, join key, and per-output rendering options.
//!
//! Every field has a default that reproduces the stock NYC maps, so an empty
//! JSON object (or no config file at all) is a valid configuration.

use std::{fs, path::{Path, PathBuf}};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{error::ScoreError, io::svg::ColorScheme, score::ScoreWeights};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub weights: ScoreWeights,
    /// GeoJSON feature property holding the region name.
    pub name_property: String,
    pub output_dir: PathBuf,
    pub scores_file: String,
    pub static_map: StaticMapConfig,
    pub web_map: WebMapConfig,
    pub animation: AnimationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            name_property: "BoroName".to_string(),
            output_dir: PathBuf::from("output"),
            scores_file: "scores.csv".to_string(),
            static_map: StaticMapConfig::default(),
            web_map: WebMapConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticMapConfig {
    pub color_scheme: ColorScheme,
    pub width: u32,
    pub margin: u32,
    pub title: String,
    pub subtitle: String,
    pub notes: Vec<String>,
    pub file_name: String,
}

impl Default for StaticMapConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::RdYlGn,
            width: 1200,
            margin: 40,
            title: "2025 NYC Voter Influence Landscape".to_string(),
            subtitle: "(Strategic Opportunity Index by Borough)".to_string(),
            notes: vec![
                "Higher = Younger, Educated, Unaffiliated, and Undermobilized Voters".to_string(),
                "Use this map to identify priority regions for civic engagement or outreach".to_string(),
            ],
            file_name: "nyc-opportunity.svg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebMapConfig {
    pub color_scheme: ColorScheme,
    /// Initial view as [lat, lon].
    pub center: [f64; 2],
    pub zoom: u8,
    pub fill_opacity: f64,
    pub line_opacity: f64,
    pub legend: String,
    pub file_name: String,
}

impl Default for WebMapConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::YlGn,
            center: [40.7128, -74.0060],
            zoom: 10,
            fill_opacity: 0.7,
            line_opacity: 0.3,
            legend: "Strategic Opportunity Index (0.0 – 1.0)".to_string(),
            file_name: "nyc-vote-heatmap.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub color_scheme: ColorScheme,
    pub width: u32,
    pub margin: u32,
    pub seconds_per_frame: f64,
    pub title: String,
    pub file_name: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Viridis,
            width: 900,
            margin: 30,
            seconds_per_frame: 1.5,
            title: "NYC Borough Turnout 2021–2024".to_string(),
            file_name: "nyc-turnout-animated.svg".to_string(),
        }
    }
}

impl Config {
    /// Load a JSON config file; absent keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ScoreError::MissingInputFile(path.to_path_buf()).into());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("[config] Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        ensure!(!self.name_property.trim().is_empty(), "[config] name_property must not be empty");
        ensure!(self.static_map.width > 2 * self.static_map.margin,
            "[config] static_map.width ({}) must exceed twice the margin ({})", self.static_map.width, self.static_map.margin);
        ensure!(self.animation.width > 2 * self.animation.margin,
            "[config] animation.width ({}) must exceed twice the margin ({})", self.animation.width, self.animation.margin);
        ensure!(self.animation.seconds_per_frame.is_finite() && self.animation.seconds_per_frame > 0.0,
            "[config] animation.seconds_per_frame must be positive");
        for (name, value) in [("fill_opacity", self.web_map.fill_opacity), ("line_opacity", self.web_map.line_opacity)] {
            ensure!((0.0..=1.0).contains(&value), "[config] web_map.{name} must lie in [0, 1], got {value}");
        }
        Ok(())
    }

    pub fn static_map_path(&self) -> PathBuf { self.output_dir.join(&self.static_map.file_name) }

    pub fn web_map_path(&self) -> PathBuf { self.output_dir.join(&self.web_map.file_name) }

    pub fn animation_path(&self) -> PathBuf { self.output_dir.join(&self.animation.file_name) }

    pub fn scores_path(&self) -> PathBuf { self.output_dir.join(&self.scores_file) }
}
