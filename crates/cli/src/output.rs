//! Result formatting for the `cie94` binary.

use cie94_core::{Cie94Weights, ColorPair, Lab};
use clap::ValueEnum;
use serde_json::{json, Value};

/// CIE94 application, selecting the weighting constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Application {
    GraphicArts,
    Textiles,
}

impl Application {
    pub fn weights(self) -> Cie94Weights {
        match self {
            Application::GraphicArts => Cie94Weights::graphic_arts(),
            Application::Textiles => Cie94Weights::textiles(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Application::GraphicArts => "graphic-arts",
            Application::Textiles => "textiles",
        }
    }
}

/// Formats a delta-E as the shortest string that reads back to the same
/// `f64`, always with a fractional part (`100.0`, not `100`).
///
/// Very small or large values use Rust's exponent form (`1e-5`), which is
/// not zero-padded like `1e-05`. 8-bit inputs never produce such values.
pub fn format_delta_e(delta_e: f64) -> String {
    format!("{delta_e:?}")
}

fn lab_json(lab: Lab) -> Value {
    json!({ "l": lab.l, "a": lab.a, "b": lab.b })
}

/// Builds the `--json` report for a computed pair.
pub fn report_json(pair: &ColorPair, application: Application) -> Value {
    let (reference_lab, sample_lab) = pair.labs();
    let delta_e = pair.delta_e(&application.weights());
    json!({
        "reference": pair.reference.to_hex(),
        "sample": pair.sample.to_hex(),
        "reference_lab": lab_json(reference_lab),
        "sample_lab": lab_json(sample_lab),
        "application": application.name(),
        "delta_e": delta_e,
    })
}
