//! The `Rgba` color type and blending helpers.
//!
//! Colors carry sRGB components plus straight (non-premultiplied) alpha,
//! all in [0, 1] as `f64`. Mixing happens in linear RGB so gradients between
//! the neutral and accent tones don't darken mid-way, then converts back to
//! sRGB for drawing.

use crate::error::SceneError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with straight alpha, components in [0, 1].
///
/// Serializes as a hex string: `"#rrggbb"` when fully opaque, `"#rrggbbaa"`
/// otherwise. The hex round-trip has 8-bit quantization (1/255 precision
/// loss), which is acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully opaque color from sRGB components.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a hex color string like `"#2d2d2d"` or `"#ff4d00cc"`
    /// (leading `#` optional, case insensitive, 6 or 8 digits).
    ///
    /// Returns `SceneError::InvalidColor` for any other shape.
    pub fn from_hex(hex: &str) -> Result<Rgba, SceneError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(SceneError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        let component = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| SceneError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        let r = component(0..2, "red")?;
        let g = component(2..4, "green")?;
        let b = component(4..6, "blue")?;
        let a = if hex.len() == 8 {
            component(6..8, "alpha")?
        } else {
            1.0
        };
        Ok(Rgba { r, g, b, a })
    }

    /// Formats the color as `"#rrggbb"` (opaque) or `"#rrggbbaa"`.
    ///
    /// Components are quantized to 8-bit with rounding.
    pub fn to_hex(self) -> String {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (q(self.r), q(self.g), q(self.b), q(self.a));
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Returns this color with the given alpha, clamped to [0, 1].
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Interpolates from `self` toward `other` by `t` in [0, 1].
    ///
    /// Color components interpolate in linear RGB (gamma-correct); alpha
    /// interpolates linearly. `t` is clamped to [0, 1].
    pub fn mix(self, other: Rgba, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        // Exact at the endpoints; the gamma round-trip is only approximate.
        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return other;
        }
        let lerp = |x: f64, y: f64| x + t * (y - x);
        let from = (
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        );
        let to = (
            srgb_to_linear(other.r),
            srgb_to_linear(other.g),
            srgb_to_linear(other.b),
        );
        Rgba {
            r: linear_to_srgb(lerp(from.0, to.0)),
            g: linear_to_srgb(lerp(from.1, to.1)),
            b: linear_to_srgb(lerp(from.2, to.2)),
            a: lerp(self.a, other.a),
        }
    }

    /// Quantizes to an RGBA8 pixel (straight alpha).
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Applies inverse sRGB gamma to one component.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to one linear component.
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
