#![deny(unsafe_code)]
//! Core of the cie94 color-difference tool.
//!
//! Parses hex colors into `Rgb`, converts them through `LinearRgb` and `Xyz`
//! into CIE `Lab`, and measures the CIE94 delta-E between a reference and a
//! sample.

pub mod color;
pub mod delta;
pub mod error;

pub use color::{
    hex_to_lab, hex_to_rgb, is_valid_hex_color, rgb_to_lab, Lab, LinearRgb, Rgb, Xyz,
};
pub use delta::{delta_e_cie94, delta_e_cie94_with, Cie94Weights, ColorPair};
pub use error::ColorError;
