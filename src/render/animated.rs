use std::{io::Write, path::Path};

use anyhow::{anyhow, Result};

use crate::{
    config::AnimationConfig,
    error::ScoreError,
    io::svg::{self, escape_xml, Frame, SvgStringWriter, SvgWriter},
    types::{BoundarySet, TurnoutSeries},
};

const TITLE_SPACE: f64 = 60.0;
const LEGEND_SPACE: f64 = 50.0;

/// Turnout choropleth that steps through every year of `series` using SMIL animation.
pub fn write_animated_map(path: &Path, boundaries: &BoundarySet, series: &TurnoutSeries, config: &AnimationConfig) -> Result<()> {
    let mut writer = SvgWriter::new(path)?;
    draw_animated_map(&mut writer, boundaries, series, config)?;
    writer.flush()?;
    Ok(())
}

pub fn animated_map_to_string(boundaries: &BoundarySet, series: &TurnoutSeries, config: &AnimationConfig) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    draw_animated_map(&mut writer, boundaries, series, config)?;
    writer.into_string()
}

/// Every boundary needs a series and every series needs a boundary.
fn check_coverage(boundaries: &BoundarySet, series: &TurnoutSeries, years: &[u16]) -> Result<(), ScoreError> {
    let missing_in_series = boundaries.names()
        .filter(|name| !series.contains_region(name))
        .map(str::to_owned)
        .collect::<Vec<_>>();
    let missing_in_boundaries = series.regions()
        .filter(|name| boundaries.get(name).is_none())
        .map(str::to_owned)
        .collect::<Vec<_>>();
    if !missing_in_series.is_empty() || !missing_in_boundaries.is_empty() {
        return Err(ScoreError::join_mismatch(missing_in_series, missing_in_boundaries));
    }

    for name in boundaries.names() {
        if let Some(year) = years.iter().find(|&&y| series.turnout(name, y).is_none()) {
            return Err(ScoreError::MalformedInput(format!("no {year} turnout for {name}")));
        }
    }
    Ok(())
}

fn draw_animated_map<W: Write>(writer: &mut W, boundaries: &BoundarySet, series: &TurnoutSeries, config: &AnimationConfig) -> Result<()> {
    let years = series.years();
    if years.is_empty() || boundaries.is_empty() { return Err(ScoreError::EmptyInput.into()) }
    check_coverage(boundaries, series, &years)?;

    let bounds = boundaries.bounds()
        .ok_or_else(|| anyhow!("[render::animated] Could not determine bounds; nothing to draw."))?;
    let (lo, hi) = series.range().ok_or(ScoreError::EmptyInput)?;
    // A flat series has no spread; paint it mid-ramp.
    let shade = |turnout: f64| if hi > lo { (turnout - lo) / (hi - lo) } else { 0.5 };

    let frame = Frame::fit(bounds, config.width as f64, config.margin as f64, TITLE_SPACE, LEGEND_SPACE);
    let duration = config.seconds_per_frame * years.len() as f64;
    let key_times = (0..years.len())
        .map(|i| format!("{:.4}", i as f64 / years.len() as f64))
        .collect::<Vec<_>>()
        .join(";");
    let animate = |attr: &str, values: &str| format!(
        r#"<animate attributeName="{attr}" values="{values}" keyTimes="{key_times}" calcMode="discrete" dur="{duration}s" repeatCount="indefinite"/>"#,
    );

    svg::write_svg_header(writer, &frame)?;
    svg::write_svg_styles(writer)?;

    let center = frame.width / 2.0;
    writeln!(writer, r#"<text class="title" x="{center:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        frame.margin + 24.0, escape_xml(&config.title))?;

    for boundary in boundaries.iter() {
        let colors = years.iter()
            .map(|&year| {
                let turnout = series.turnout(&boundary.name, year).unwrap_or(f64::NAN);
                config.color_scheme.color(shade(turnout)).to_string()
            })
            .collect::<Vec<_>>();
        writeln!(
            writer,
            r#"<path class="region" fill-rule="evenodd" style="fill:{}" d="{}"><title>{}</title>{}</path>"#,
            colors[0],
            svg::multipolygon_to_path(&boundary.shape, &frame),
            escape_xml(&boundary.name),
            animate("fill", &colors.join(";")),
        )?;
    }

    // One label per year, visible only during its own frame.
    for (i, year) in years.iter().enumerate() {
        let visibility = (0..years.len())
            .map(|j| if i == j { "visible" } else { "hidden" })
            .collect::<Vec<_>>()
            .join(";");
        let initial = if i == 0 { "visible" } else { "hidden" };
        writeln!(
            writer,
            r#"<text class="subtitle" x="{center:.1}" y="{:.1}" text-anchor="middle" visibility="{initial}">{year}{}</text>"#,
            frame.margin + 48.0,
            animate("visibility", &visibility),
        )?;
    }

    let legend_width = (frame.width - 2.0 * frame.margin).min(320.0);
    let low = format!("{:.0}%", lo * 100.0);
    let high = format!("{:.0}%", hi * 100.0);
    svg::write_svg_legend(writer, config.color_scheme, center - legend_width / 2.0, frame.map_bottom() + 12.0, legend_width, (&low, &high))?;

    svg::write_svg_footer(writer)?;
    Ok(())
}
