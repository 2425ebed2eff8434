use geo::{Coord, CoordsIter, LineString, MultiPolygon, Rect};

/// Maps lon/lat onto an SVG canvas of fixed width (Y down).
///
/// Longitude is compressed by cos(mid-latitude) so boroughs keep a plausible aspect ratio.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) margin: f64,
    pub(crate) scale: f64,
    pub(crate) top: f64,
    x_factor: f64,
    bounds: Rect<f64>,
}

impl Frame {
    /// Fit `bounds` into `width` pixels, leaving `margin` on each side plus `top`
    /// and `bottom` extra pixels for titles and legends.
    pub(crate) fn fit(bounds: Rect<f64>, width: f64, margin: f64, top: f64, bottom: f64) -> Self {
        let mid_lat = (bounds.min().y + bounds.max().y) / 2.0;
        let x_factor = mid_lat.to_radians().cos().abs().max(1e-6);
        let span_x = (bounds.width() * x_factor).max(f64::EPSILON);
        let scale = (width - 2.0 * margin) / span_x;
        let height = bounds.height() * scale + 2.0 * margin + top + bottom;
        Self { width, height, margin, scale, top, x_factor, bounds }
    }

    #[inline]
    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.margin + (coord.x - self.bounds.min().x) * self.x_factor * self.scale;
        let y = self.margin + self.top + (self.bounds.max().y - coord.y) * self.scale;
        (x, y)
    }

    pub(crate) fn bounds(&self) -> &Rect<f64> { &self.bounds }

    /// Y coordinate just below the map area.
    pub(crate) fn map_bottom(&self) -> f64 {
        self.margin + self.top + self.bounds.height() * self.scale
    }
}

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>, frame: &Frame) -> String {
    let mut out = String::new();
    for polygon in &shape.0 {
        ring_to_path(polygon.exterior(), frame, &mut out);
        for interior in polygon.interiors() {
            ring_to_path(interior, frame, &mut out);
        }
    }
    out
}

/// Append a ring as an SVG subpath: "M x,y L x,y ... Z"
fn ring_to_path(ring: &LineString<f64>, frame: &Frame, out: &mut String) {
    let mut coords = ring.coords_iter().map(|coord| frame.project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn unit_bounds() -> Rect<f64> {
        Rect::new((-74.0, 40.0), (-73.0, 41.0))
    }

    #[test]
    fn corners_land_inside_margins() {
        let frame = Frame::fit(unit_bounds(), 500.0, 10.0, 0.0, 0.0);
        let (x0, y0) = frame.project(&Coord { x: -74.0, y: 41.0 });
        let (x1, _) = frame.project(&Coord { x: -73.0, y: 40.0 });
        assert!((x0 - 10.0).abs() < 1e-9);
        assert!((y0 - 10.0).abs() < 1e-9);
        assert!((x1 - 490.0).abs() < 1e-9);
    }

    #[test]
    fn latitude_compression_makes_map_taller_than_wide() {
        let frame = Frame::fit(unit_bounds(), 500.0, 0.0, 0.0, 0.0);
        assert!(frame.height > frame.width);
    }

    #[test]
    fn title_and_legend_space_extend_height() {
        let bare = Frame::fit(unit_bounds(), 500.0, 10.0, 0.0, 0.0);
        let framed = Frame::fit(unit_bounds(), 500.0, 10.0, 60.0, 40.0);
        assert!((framed.height - bare.height - 100.0).abs() < 1e-9);
        let (_, y) = framed.project(&Coord { x: -74.0, y: 41.0 });
        assert!((y - 70.0).abs() < 1e-9);
        assert!((framed.map_bottom() - (bare.height - 10.0 + 60.0)).abs() < 1e-9);
    }

    #[test]
    fn path_has_one_subpath_per_ring() {
        let shape = MultiPolygon(vec![polygon![
            (x: -74.0, y: 40.0), (x: -73.0, y: 40.0), (x: -73.0, y: 41.0), (x: -74.0, y: 40.0),
        ]]);
        let frame = Frame::fit(unit_bounds(), 100.0, 0.0, 0.0, 0.0);
        let path = multipolygon_to_path(&shape, &frame);
        assert_eq!(path.matches('M').count(), 1);
        assert!(path.ends_with('Z'));
    }
}
