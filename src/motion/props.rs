use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MotionError;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn lerp(self, to: Rgba, t: f64) -> Rgba {
        let channel = |a: u8, b: u8| lerp(a as f64, b as f64, t).round().clamp(0.0, 255.0) as u8;
        Rgba {
            r: channel(self.r, to.r),
            g: channel(self.g, to.g),
            b: channel(self.b, to.b),
            a: lerp(self.a, to.a, t).clamp(0.0, 1.0),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MotionError::InvalidColor(s.to_string());
        let value = s.trim();

        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Rgba::new(byte(0)?, byte(2)?, byte(4)?, 1.0));
        }

        let inner = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        let alpha = match parts.get(3) {
            Some(a) => a.parse::<f64>().map_err(|_| invalid())?,
            None => 1.0,
        };
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid());
        }
        Ok(Rgba::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha))
    }
}

impl TryFrom<String> for Rgba {
    type Error = MotionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One frame's worth of visual state for a single element. Unset fields are
/// left alone when the snapshot is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualProps {
    pub opacity: Option<f64>,
    /// Vertical offset in px.
    pub y: Option<f64>,
    pub scale: Option<f64>,
    /// Filter blur radius in px.
    pub blur: Option<f64>,
    pub background: Option<Rgba>,
    pub backdrop_blur: Option<f64>,
    pub border_color: Option<Rgba>,
    pub z_index: Option<i32>,
}

impl VisualProps {
    /// Interpolates field by field. A field set on only one side snaps to
    /// the `to` value (or keeps `self` when `to` leaves it unset).
    pub fn lerp(&self, to: &VisualProps, t: f64) -> VisualProps {
        fn num(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
            match (a, b) {
                (Some(a), Some(b)) => Some(lerp(a, b, t)),
                (a, b) => b.or(a),
            }
        }
        fn color(a: Option<Rgba>, b: Option<Rgba>, t: f64) -> Option<Rgba> {
            match (a, b) {
                (Some(a), Some(b)) => Some(a.lerp(b, t)),
                (a, b) => b.or(a),
            }
        }

        VisualProps {
            opacity: num(self.opacity, to.opacity, t),
            y: num(self.y, to.y, t),
            scale: num(self.scale, to.scale, t),
            blur: num(self.blur, to.blur, t),
            background: color(self.background, to.background, t),
            backdrop_blur: num(self.backdrop_blur, to.backdrop_blur, t),
            border_color: color(self.border_color, to.border_color, t),
            z_index: to.z_index.or(self.z_index),
        }
    }

    /// CSS declarations for this snapshot, in a stable order. `y` and
    /// `scale` share the `transform` property.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();

        if let Some(opacity) = self.opacity {
            out.push(("opacity", format!("{:.4}", opacity)));
        }

        let transform = match (self.y, self.scale) {
            (Some(y), Some(s)) => Some(format!("translate3d(0, {:.2}px, 0) scale({:.4})", y, s)),
            (Some(y), None) => Some(format!("translate3d(0, {:.2}px, 0)", y)),
            (None, Some(s)) => Some(format!("scale({:.4})", s)),
            (None, None) => None,
        };
        if let Some(transform) = transform {
            out.push(("transform", transform));
        }

        if let Some(blur) = self.blur {
            out.push(("filter", format!("blur({:.2}px)", blur)));
        }
        if let Some(background) = self.background {
            out.push(("background-color", background.to_string()));
        }
        if let Some(blur) = self.backdrop_blur {
            let value = format!("blur({:.2}px)", blur);
            out.push(("-webkit-backdrop-filter", value.clone()));
            out.push(("backdrop-filter", value));
        }
        if let Some(border) = self.border_color {
            out.push(("border-color", border.to_string()));
        }
        if let Some(z) = self.z_index {
            out.push(("z-index", z.to_string()));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_rgba() {
        assert_eq!("#0f172a".parse::<Rgba>().unwrap(), Rgba::new(15, 23, 42, 1.0));
        assert_eq!(
            "rgba(255, 255, 255, 0.1)".parse::<Rgba>().unwrap(),
            Rgba::new(255, 255, 255, 0.1)
        );
        assert_eq!("rgb(1,2,3)".parse::<Rgba>().unwrap(), Rgba::new(1, 2, 3, 1.0));
    }

    #[test]
    fn rejects_malformed_colours() {
        for bad in ["#fff", "rgba(1, 2)", "rgba(300, 0, 0, 1)", "rgba(0, 0, 0, 2)", "blue"] {
            assert!(bad.parse::<Rgba>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn colour_lerp_midpoint() {
        let from = Rgba::new(0, 0, 0, 0.0);
        let to = Rgba::new(200, 100, 50, 1.0);
        assert_eq!(from.lerp(to, 0.5), Rgba::new(100, 50, 25, 0.5));
    }

    #[test]
    fn lerp_only_blends_shared_fields() {
        let from = VisualProps {
            opacity: Some(0.0),
            y: Some(50.0),
            z_index: Some(1),
            ..Default::default()
        };
        let to = VisualProps {
            opacity: Some(1.0),
            scale: Some(0.5),
            ..Default::default()
        };
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.y, Some(50.0));
        assert_eq!(mid.scale, Some(0.5));
        assert_eq!(mid.z_index, Some(1));
    }

    #[test]
    fn css_combines_offset_and_scale_into_one_transform() {
        let props = VisualProps {
            y: Some(12.0),
            scale: Some(0.9),
            blur: Some(20.0),
            z_index: Some(3),
            ..Default::default()
        };
        assert_eq!(
            props.css(),
            vec![
                ("transform", "translate3d(0, 12.00px, 0) scale(0.9000)".to_string()),
                ("filter", "blur(20.00px)".to_string()),
                ("z-index", "3".to_string()),
            ]
        );
        assert!(VisualProps::default().css().is_empty());
    }
}
