//! GeoJSON reading and writing for region outlines.

use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::{error::ScoreError, score::ScoreSet, types::{Boundary, BoundarySet}};

/// Read a FeatureCollection of named (Multi)Polygon features from `path`.
///
/// Each feature's name comes from the `name_property` entry of its properties.
pub fn read_boundaries(path: &Path, name_property: &str) -> Result<BoundarySet> {
    if !path.is_file() {
        return Err(ScoreError::MissingInputFile(path.to_path_buf()).into());
    }
    let bytes = fs::read(path)
        .with_context(|| format!("[io::geojson] Failed to read {}", path.display()))?;
    let boundaries = read_boundaries_from_bytes(&bytes, name_property)
        .with_context(|| format!("[io::geojson] Failed to load boundaries from {}", path.display()))?;
    info!(path = %path.display(), regions = boundaries.len(), "loaded boundaries");
    Ok(boundaries)
}

/// Parse boundaries from GeoJSON bytes.
pub fn read_boundaries_from_bytes(bytes: &[u8], name_property: &str) -> Result<BoundarySet> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson] Failed to parse GeoJSON")?;

    let features = value["features"].as_array()
        .ok_or_else(|| malformed("expected a FeatureCollection with a \"features\" array"))?;

    let boundaries = features.iter().enumerate()
        .map(|(idx, feature)| {
            let name = feature["properties"][name_property].as_str()
                .ok_or_else(|| malformed(format!("feature {idx} has no string property {name_property:?}")))?;
            let shape = parse_geometry(&feature["geometry"])
                .with_context(|| format!("[io::geojson] Invalid geometry for feature {name:?}"))?;
            Ok(Boundary::new(name.trim(), shape))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BoundarySet::new(boundaries)?)
}

/// Build a FeatureCollection of the boundaries, tagging each feature with its scores.
pub fn scored_feature_collection(boundaries: &BoundarySet, scores: &ScoreSet, name_property: &str) -> Value {
    let features = boundaries.iter()
        .map(|boundary| {
            let mut properties = Map::new();
            properties.insert(name_property.to_string(), json!(boundary.name));
            if let Some(score) = scores.get(&boundary.name) {
                properties.insert("raw_weight".to_string(), json!(score.raw_weight));
                properties.insert("normalized_weight".to_string(), json!(score.normalized_weight));
            }
            json!({
                "type": "Feature",
                "geometry": multipolygon_to_geojson(&boundary.shape),
                "properties": properties,
            })
        })
        .collect::<Vec<_>>();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn malformed(message: impl Into<String>) -> anyhow::Error {
    ScoreError::MalformedInput(message.into()).into()
}

fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("geometry has no coordinates array"))?;

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon(coords)?])),
        Some("MultiPolygon") => coords.iter()
            .map(|polygon| {
                let rings = polygon.as_array().ok_or_else(|| anyhow!("polygon is not an array"))?;
                parse_polygon(rings)
            })
            .collect::<Result<Vec<_>>>()
            .map(MultiPolygon),
        Some(other) => Err(malformed(format!("unsupported geometry type {other:?}"))),
        None => Err(malformed("geometry has no type")),
    }
}

/// Parse `[exterior, hole, hole, ...]` into a Polygon.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter()
        .map(|ring| {
            let points = ring.as_array().ok_or_else(|| anyhow!("ring is not an array"))?;
            parse_ring(points)
        })
        .collect::<Result<Vec<_>>>()?;

    if rings.is_empty() { return Err(anyhow!("polygon has no exterior ring")) }
    let exterior = rings.remove(0);
    Ok(Polygon::new(exterior, rings))
}

/// Parse `[[x, y], ...]`, closing the ring if the file left it open.
fn parse_ring(points: &[Value]) -> Result<LineString<f64>> {
    let mut coords = points.iter()
        .map(|point| {
            let pair = point.as_array().filter(|p| p.len() >= 2)
                .ok_or_else(|| anyhow!("position must have at least two numbers"))?;
            let x = pair[0].as_f64().ok_or_else(|| anyhow!("x must be a number"))?;
            let y = pair[1].as_f64().ok_or_else(|| anyhow!("y must be a number"))?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()?;

    if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
        if first != last { coords.push(first) }
    }
    Ok(LineString(coords))
}

fn multipolygon_to_geojson(shape: &MultiPolygon<f64>) -> Value {
    let ring = |ls: &LineString<f64>| ls.coords().map(|c| vec![c.x, c.y]).collect::<Vec<_>>();
    let polygons = shape.0.iter()
        .map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(ring)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    json!({ "type": "MultiPolygon", "coordinates": polygons })
}
