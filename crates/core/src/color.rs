//! Color types and conversion functions for cie94.
//!
//! Provides four color types (`Rgb`, `LinearRgb`, `Xyz`, `Lab`) and the pure
//! conversion chain between them:
//!
//! ```text
//! hex -> Rgb -> LinearRgb -> Xyz -> Lab
//! ```
//!
//! Formulas follow the sRGB / D65 reference math (Bruce Lindbloom). Uses
//! `f64` throughout.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// D65 reference white, scaled so that Y = 100.
pub const D65_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.000,
    z: 108.883,
};

/// CIE epsilon: above this the Lab pivot uses the cube root.
pub const LAB_EPSILON: f64 = 0.008856;

/// CIE kappa: slope of the linear extension near black.
pub const LAB_KAPPA: f64 = 903.3;

/// 8-bit sRGB color parsed from a hex string.
///
/// Serializes as a lowercase hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Linear-light RGB (sRGB companding removed), components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE XYZ tristimulus values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L*a*b* color. L* is in [0, 100], a* and b* are signed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Chroma: length of the (a*, b*) vector.
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// Returns true if `s` is a 6-digit hex color, optionally prefixed with `#`.
///
/// Accepts exactly 6 characters with no `#`, or exactly 7 characters where
/// the first is `#`. Every remaining character must be an ASCII hex digit.
pub fn is_valid_hex_color(s: &str) -> bool {
    let len = s.chars().count();
    let digits = match s.strip_prefix('#') {
        Some(rest) if len == 7 => rest,
        None if len == 6 => s,
        _ => return false,
    };
    digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Checks `s` against [`is_valid_hex_color`].
///
/// Returns `ColorError::InvalidHexColor` carrying the input on failure.
pub fn validate_hex(s: &str) -> Result<&str, ColorError> {
    if is_valid_hex_color(s) {
        Ok(s)
    } else {
        Err(ColorError::InvalidHexColor(s.to_string()))
    }
}

/// Parses a hex color like `"#ff00aa"` or `"FF00AA"` into 8-bit channels.
///
/// The digits after the optional `#` are split into three equal-width
/// groups, each read as a base-16 integer.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    validate_hex(hex)?;
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let width = digits.len() / 3;
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i * width..(i + 1) * width], 16)
            .map_err(|_| ColorError::InvalidHexColor(hex.to_string()))
    };
    Ok(Rgb {
        r: channel(0)?,
        g: channel(1)?,
        b: channel(2)?,
    })
}

impl Rgb {
    /// Formats the color as `"#rrggbb"` (lowercase, zero-padded).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex_to_rgb(&s).map_err(serde::de::Error::custom)
    }
}

/// Inverse sRGB companding of one normalized channel value.
///
/// The threshold itself belongs to the linear segment.
pub fn inverse_srgb_companding(x: f64) -> f64 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts 8-bit sRGB to linear RGB.
pub fn rgb_to_linear(c: Rgb) -> LinearRgb {
    LinearRgb {
        r: inverse_srgb_companding(c.r as f64 / 255.0),
        g: inverse_srgb_companding(c.g as f64 / 255.0),
        b: inverse_srgb_companding(c.b as f64 / 255.0),
    }
}

/// Converts linear RGB to XYZ using the sRGB (D65) primaries matrix.
pub fn linear_to_xyz(c: LinearRgb) -> Xyz {
    Xyz {
        x: 0.4124564 * c.r + 0.3575761 * c.g + 0.1804375 * c.b,
        y: 0.2126729 * c.r + 0.7151522 * c.g + 0.0721750 * c.b,
        z: 0.0193339 * c.r + 0.1191920 * c.g + 0.9503041 * c.b,
    }
}

/// Convenience: 8-bit sRGB straight to XYZ.
pub fn rgb_to_xyz(c: Rgb) -> Xyz {
    linear_to_xyz(rgb_to_linear(c))
}

/// Lab companding function applied to a white-relative XYZ component.
///
/// Cube root above [`LAB_EPSILON`], linear extension at or below it.
pub fn pivot_xyz(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

/// Converts XYZ (Y of white = 1) to Lab relative to [`D65_WHITE`].
pub fn xyz_to_lab(c: Xyz) -> Lab {
    let fx = pivot_xyz((c.x * 100.0) / D65_WHITE.x);
    let fy = pivot_xyz((c.y * 100.0) / D65_WHITE.y);
    let fz = pivot_xyz((c.z * 100.0) / D65_WHITE.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convenience: 8-bit sRGB to Lab via the chain sRGB -> linear -> XYZ -> Lab.
pub fn rgb_to_lab(c: Rgb) -> Lab {
    let xyz = rgb_to_xyz(c);
    let lab = xyz_to_lab(xyz);
    tracing::trace!(rgb = %c, ?xyz, ?lab, "converted color");
    lab
}

/// Convenience: validates and parses a hex string, then converts it to Lab.
pub fn hex_to_lab(hex: &str) -> Result<Lab, ColorError> {
    hex_to_rgb(hex).map(rgb_to_lab)
}
