//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use super::{ColorScheme, Frame};

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// In-memory SVG writer, used when the document is embedded or inspected.
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl SvgWriter {
    /// Create a new SVG writer to a file path
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

/// Write the XML declaration, the opening <svg> tag and a white background.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, frame: &Frame) -> Result<()> {
    let bounds = frame.bounds();
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"
    width="{width:.0}" height="{height:.0}"
    viewBox="0 0 {width:.0} {height:.0}"
    data-lon-min="{lon_min}" data-lon-max="{lon_max}"
    data-lat-min="{lat_min}" data-lat-max="{lat_max}"
    data-margin="{margin}" data-scale="{scale}">"##,
        width = frame.width,
        height = frame.height,
        margin = frame.margin,
        scale = frame.scale,
        lon_min = bounds.min().x,
        lon_max = bounds.max().x,
        lat_min = bounds.min().y,
        lat_max = bounds.max().y,
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    Ok(())
}

/// Write shared styles for region outlines and labels.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .region {{ stroke: #000000; stroke-width: 1; fill-opacity: 0.9; vector-effect: non-scaling-stroke; }}
    .title {{ font-family: sans-serif; font-size: 22px; font-weight: bold; fill: #111827; }}
    .subtitle {{ font-family: sans-serif; font-size: 16px; font-weight: bold; fill: #111827; }}
    .note {{ font-family: sans-serif; font-size: 12px; fill: #808080; }}
    .tick {{ font-family: sans-serif; font-size: 11px; fill: #111827; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write a horizontal gradient legend bar labelled from 0.0 to 1.0.
pub(crate) fn write_svg_legend<W: Write>(
    writer: &mut W,
    scheme: ColorScheme,
    x: f64,
    y: f64,
    width: f64,
    labels: (&str, &str),
) -> Result<()> {
    writeln!(writer, r#"<defs><linearGradient id="legend-ramp" x1="0" y1="0" x2="1" y2="0">"#)?;
    for (offset, color) in scheme.stops(11) {
        writeln!(writer, r#"<stop offset="{:.0}%" stop-color="{}"/>"#, offset * 100.0, color)?;
    }
    writeln!(writer, "</linearGradient></defs>")?;
    writeln!(writer, r##"<rect x="{x:.1}" y="{y:.1}" width="{width:.1}" height="12" fill="url(#legend-ramp)" stroke="#111827" stroke-width="0.5"/>"##)?;
    writeln!(writer, r#"<text class="tick" x="{x:.1}" y="{:.1}" text-anchor="start">{}</text>"#, y + 26.0, escape_xml(labels.0))?;
    writeln!(writer, r#"<text class="tick" x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#, x + width, y + 26.0, escape_xml(labels.1))?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Escape text for use inside SVG/HTML element content and attributes.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
