use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::{
    config::WebMapConfig,
    io::{geojson::scored_feature_collection, svg::escape_xml},
    score::ScoreSet,
    types::BoundarySet,
};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Interactive Leaflet map of the opportunity index as a single HTML document.
pub fn write_web_map(path: &Path, boundaries: &BoundarySet, scores: &ScoreSet, name_property: &str, config: &WebMapConfig) -> Result<()> {
    let html = web_map_to_string(boundaries, scores, name_property, config)?;
    fs::write(path, html)
        .with_context(|| format!("[render::web_map] Failed to write {}", path.display()))
}

pub fn web_map_to_string(boundaries: &BoundarySet, scores: &ScoreSet, name_property: &str, config: &WebMapConfig) -> Result<String> {
    let mut collection = scored_feature_collection(boundaries, scores, name_property);
    if let Some(features) = collection["features"].as_array_mut() {
        for feature in features {
            let weight = feature["properties"]["normalized_weight"].as_f64().unwrap_or(f64::NAN);
            feature["properties"]["fill_color"] = json!(config.color_scheme.color(weight).to_hex());
        }
    }

    let gradient = config.color_scheme.stops(11).iter()
        .map(|(offset, color)| format!("{} {:.0}%", color.to_hex(), offset * 100.0))
        .collect::<Vec<_>>()
        .join(", ");

    let settings = json!({
        "center": config.center,
        "zoom": config.zoom,
        "fillOpacity": config.fill_opacity,
        "lineOpacity": config.line_opacity,
        "nameProperty": name_property,
    });

    Ok(format!(
        include_str!("web_map.html"),
        leaflet_css = LEAFLET_CSS,
        leaflet_js = LEAFLET_JS,
        legend = escape_xml(&config.legend),
        gradient = gradient,
        settings = script_json(&settings)?,
        features = script_json(&collection)?,
    ))
}

/// Serialize for embedding inside a <script> element.
fn script_json(value: &Value) -> Result<String> {
    let text = serde_json::to_string(value).context("[render::web_map] Failed to serialize map data")?;
    Ok(text.replace("</", "<\\/"))
}
