//! Color ramps for choropleth fills.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Format as CSS hex: #rrggbb
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8;
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

/// Fill for values that cannot be placed on a ramp.
pub const NO_DATA: Rgb = Rgb::new(150, 150, 150);

/// Sequential and diverging ramps, anchored on ColorBrewer / matplotlib stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    RdYlGn,
    YlGn,
    Blues,
    Viridis,
}

impl ColorScheme {
    fn anchors(self) -> &'static [Rgb] {
        const RD_YL_GN: &[Rgb] = &[
            Rgb::new(215,  25,  28),
            Rgb::new(253, 174,  97),
            Rgb::new(255, 255, 191),
            Rgb::new(166, 217, 106),
            Rgb::new( 26, 150,  65),
        ];
        const YL_GN: &[Rgb] = &[
            Rgb::new(255, 255, 204),
            Rgb::new(194, 230, 153),
            Rgb::new(120, 198, 121),
            Rgb::new( 49, 163,  84),
            Rgb::new(  0, 104,  55),
        ];
        const BLUES: &[Rgb] = &[
            Rgb::new(239, 243, 255),
            Rgb::new(189, 215, 231),
            Rgb::new(107, 174, 214),
            Rgb::new( 49, 130, 189),
            Rgb::new(  8,  81, 156),
        ];
        const VIRIDIS: &[Rgb] = &[
            Rgb::new( 68,   1,  84),
            Rgb::new( 59,  82, 139),
            Rgb::new( 33, 145, 140),
            Rgb::new( 94, 201,  98),
            Rgb::new(253, 231,  37),
        ];
        match self {
            ColorScheme::RdYlGn => RD_YL_GN,
            ColorScheme::YlGn => YL_GN,
            ColorScheme::Blues => BLUES,
            ColorScheme::Viridis => VIRIDIS,
        }
    }

    /// Color for `t` in [0, 1]; values outside are clamped, NaN/inf fall back to gray.
    pub fn color(self, t: f64) -> Rgb {
        if !t.is_finite() { return NO_DATA }

        let anchors = self.anchors();
        let x = t.clamp(0.0, 1.0) * (anchors.len() - 1) as f64;
        let i = (x.floor() as usize).min(anchors.len() - 2);
        anchors[i].lerp(anchors[i + 1], x - i as f64)
    }

    /// Evenly spaced stops from 0 to 1, for legends and CSS gradients.
    pub fn stops(self, count: usize) -> Vec<(f64, Rgb)> {
        let count = count.max(2);
        (0..count)
            .map(|i| {
                let t = i as f64 / (count - 1) as f64;
                (t, self.color(t))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_anchor_colors() {
        assert_eq!(ColorScheme::RdYlGn.color(0.0), Rgb::new(215, 25, 28));
        assert_eq!(ColorScheme::RdYlGn.color(1.0), Rgb::new(26, 150, 65));
        assert_eq!(ColorScheme::YlGn.color(0.5), Rgb::new(120, 198, 121));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(ColorScheme::Blues.color(-3.0), ColorScheme::Blues.color(0.0));
        assert_eq!(ColorScheme::Blues.color(7.0), ColorScheme::Blues.color(1.0));
    }

    #[test]
    fn nan_falls_back_to_gray() {
        assert_eq!(ColorScheme::Viridis.color(f64::NAN), NO_DATA);
    }

    #[test]
    fn hex_and_css_formatting() {
        let c = Rgb::new(8, 81, 156);
        assert_eq!(c.to_hex(), "#08519c");
        assert_eq!(c.to_string(), "rgb(8,81,156)");
    }

    #[test]
    fn scheme_names_round_trip_through_config() {
        let s: ColorScheme = serde_json::from_str("\"YlGn\"").unwrap();
        assert_eq!(s, ColorScheme::YlGn);
    }
}
