use std::{io::Write, path::Path};

use anyhow::{anyhow, Result};
use geo::Centroid;

use crate::{
    config::StaticMapConfig,
    io::svg::{self, escape_xml, Frame, SvgStringWriter, SvgWriter},
    score::ScoreSet,
    types::BoundarySet,
};

const TITLE_SPACE: f64 = 70.0;
const LEGEND_SPACE: f64 = 50.0;
const NOTE_LINE: f64 = 18.0;

/// Static choropleth of the normalized opportunity index, written as SVG.
pub fn write_static_map(path: &Path, boundaries: &BoundarySet, scores: &ScoreSet, config: &StaticMapConfig) -> Result<()> {
    let mut writer = SvgWriter::new(path)?;
    draw_static_map(&mut writer, boundaries, scores, config)?;
    writer.flush()?;
    Ok(())
}

/// Same document as `write_static_map`, returned as a string.
pub fn static_map_to_string(boundaries: &BoundarySet, scores: &ScoreSet, config: &StaticMapConfig) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    draw_static_map(&mut writer, boundaries, scores, config)?;
    writer.into_string()
}

fn draw_static_map<W: Write>(writer: &mut W, boundaries: &BoundarySet, scores: &ScoreSet, config: &StaticMapConfig) -> Result<()> {
    let bounds = boundaries.bounds()
        .ok_or_else(|| anyhow!("[render::static_map] Could not determine bounds; nothing to draw."))?;

    let bottom = LEGEND_SPACE + NOTE_LINE * config.notes.len() as f64;
    let frame = Frame::fit(bounds, config.width as f64, config.margin as f64, TITLE_SPACE, bottom);

    svg::write_svg_header(writer, &frame)?;
    svg::write_svg_styles(writer)?;

    let center = frame.width / 2.0;
    writeln!(writer, r#"<text class="title" x="{center:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        frame.margin + 24.0, escape_xml(&config.title))?;
    writeln!(writer, r#"<text class="subtitle" x="{center:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        frame.margin + 50.0, escape_xml(&config.subtitle))?;

    for boundary in boundaries.iter() {
        let score = scores.get(&boundary.name);
        let fill = config.color_scheme.color(score.map_or(f64::NAN, |s| s.normalized_weight));
        let label = match score {
            Some(s) => format!("{}: {:.3}", boundary.name, s.normalized_weight),
            None => format!("{}: no data", boundary.name),
        };
        writeln!(
            writer,
            r#"<path class="region" fill-rule="evenodd" style="fill:{fill}" d="{}"><title>{}</title></path>"#,
            svg::multipolygon_to_path(&boundary.shape, &frame),
            escape_xml(&label),
        )?;
    }

    for boundary in boundaries.iter() {
        if let Some(point) = boundary.shape.centroid() {
            let (x, y) = frame.project(&point.0);
            writeln!(writer, r#"<text class="tick" x="{x:.1}" y="{y:.1}" text-anchor="middle">{}</text>"#, escape_xml(&boundary.name))?;
        }
    }

    let legend_width = (frame.width - 2.0 * frame.margin).min(400.0);
    let legend_y = frame.map_bottom() + 12.0;
    svg::write_svg_legend(writer, config.color_scheme, center - legend_width / 2.0, legend_y, legend_width, ("0.0", "1.0"))?;

    for (i, note) in config.notes.iter().enumerate() {
        let y = legend_y + LEGEND_SPACE + NOTE_LINE * i as f64;
        writeln!(writer, r#"<text class="note" x="{center:.1}" y="{y:.1}" text-anchor="middle">{}</text>"#, escape_xml(note))?;
    }

    svg::write_svg_footer(writer)?;
    Ok(())
}
