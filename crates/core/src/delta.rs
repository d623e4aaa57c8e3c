//! CIE94 color difference.
//!
//! CIE94 weights the chroma and hue terms by the chroma of the *reference*
//! color only, so `delta_e_cie94(a, b)` and `delta_e_cie94(b, a)` differ in
//! general.

use crate::color::{hex_to_rgb, rgb_to_lab, Lab, Rgb};
use crate::error::ColorError;

/// Parametric factors and weighting constants of the CIE94 formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cie94Weights {
    pub k_l: f64,
    pub k_c: f64,
    pub k_h: f64,
    pub k1: f64,
    pub k2: f64,
}

impl Cie94Weights {
    /// Graphic arts application constants.
    pub const fn graphic_arts() -> Self {
        Cie94Weights {
            k_l: 1.0,
            k_c: 1.0,
            k_h: 1.0,
            k1: 0.045,
            k2: 0.015,
        }
    }

    /// Textiles application constants.
    pub const fn textiles() -> Self {
        Cie94Weights {
            k_l: 2.0,
            k_c: 1.0,
            k_h: 1.0,
            k1: 0.048,
            k2: 0.014,
        }
    }
}

impl Default for Cie94Weights {
    fn default() -> Self {
        Cie94Weights::graphic_arts()
    }
}

/// CIE94 delta-E of `sample` against `reference` with graphic arts weights.
pub fn delta_e_cie94(reference: Lab, sample: Lab) -> f64 {
    delta_e_cie94_with(reference, sample, &Cie94Weights::graphic_arts())
}

/// CIE94 delta-E of `sample` against `reference` with explicit weights.
///
/// `S_C` and `S_H` are computed from the reference chroma alone.
pub fn delta_e_cie94_with(reference: Lab, sample: Lab, w: &Cie94Weights) -> f64 {
    let c1 = reference.chroma();
    let c2 = sample.chroma();

    let s_l = 1.0;
    let s_c = 1.0 + w.k1 * c1;
    let s_h = 1.0 + w.k2 * c1;

    let delta_a = reference.a - sample.a;
    let delta_b = reference.b - sample.b;

    let delta_l = reference.l - sample.l;
    let delta_c = c1 - c2;
    // Cancellation can leave this a hair below zero.
    let delta_h = (delta_a * delta_a + delta_b * delta_b - delta_c * delta_c)
        .max(0.0)
        .sqrt();

    let term_l = delta_l / (w.k_l * s_l);
    let term_c = delta_c / (w.k_c * s_c);
    let term_h = delta_h / (w.k_h * s_h);
    let delta_e = (term_l * term_l + term_c * term_c + term_h * term_h).sqrt();

    tracing::debug!(term_l, term_c, term_h, delta_e, "cie94");
    delta_e
}

/// A validated reference/sample pair of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub reference: Rgb,
    pub sample: Rgb,
}

impl ColorPair {
    /// Parses both hex strings, reference first.
    ///
    /// The error names the role of the first argument that fails validation.
    pub fn parse(reference: &str, sample: &str) -> Result<ColorPair, ColorError> {
        let reference = hex_to_rgb(reference)
            .map_err(|e| ColorError::InvalidReference(e.value().to_string()))?;
        let sample =
            hex_to_rgb(sample).map_err(|e| ColorError::InvalidSample(e.value().to_string()))?;
        Ok(ColorPair { reference, sample })
    }

    /// Lab coordinates of the reference and the sample.
    pub fn labs(&self) -> (Lab, Lab) {
        (rgb_to_lab(self.reference), rgb_to_lab(self.sample))
    }

    /// Runs the full pipeline and returns the CIE94 delta-E.
    pub fn delta_e(&self, weights: &Cie94Weights) -> f64 {
        let (reference, sample) = self.labs();
        delta_e_cie94_with(reference, sample, weights)
    }
}
