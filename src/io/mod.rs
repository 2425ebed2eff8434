//! IO module for format-specific reading and writing operations.
//!
//! Each format module handles reading and writing for a specific file format.
//!
//! # Format Modules
//!
//! - `geojson` - region outlines in, scored FeatureCollections out
//! - `csv` - attribute tables in, score tables out
//! - `svg` - SVG primitives (projection, color ramps, writers) for the map renderers
//! - `fs` - output directory and overwrite checks

pub mod csv;
pub mod fs;
pub mod geojson;
pub mod svg;
