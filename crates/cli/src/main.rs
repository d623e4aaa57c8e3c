#![deny(unsafe_code)]
//! CLI binary for cie94.
//!
//! `cie94 <REFERENCE> <SAMPLE>` prints the CIE94 delta-E between two hex
//! colors (`#rrggbb` or `rrggbb`).

mod error;
mod output;

use cie94_core::ColorPair;
use clap::Parser;
use error::CliError;
use output::Application;
use std::process;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "cie94=warn";

#[derive(Parser)]
#[command(
    name = "cie94",
    about = "Calculates the CIE94 delta of two hexadecimal colors."
)]
struct Cli {
    /// The hexcode of the reference color.
    #[arg(value_name = "Reference")]
    reference: String,

    /// The hexcode of the sample color.
    #[arg(value_name = "Sample")]
    sample: String,

    /// CIE94 application weights.
    #[arg(long, value_enum, default_value_t = Application::GraphicArts)]
    application: Application,

    /// Output as JSON instead of a bare number.
    #[arg(long)]
    json: bool,

    /// Exit with a non-zero status when a color is rejected.
    #[arg(long)]
    strict: bool,
}

fn run(cli: &Cli) -> Result<(), CliError> {
    tracing::debug!(
        reference = %cli.reference,
        sample = %cli.sample,
        application = cli.application.name(),
        "computing delta-E"
    );

    let pair = ColorPair::parse(&cli.reference, &cli.sample).inspect_err(|e| {
        tracing::debug!(value = e.value(), "rejected color");
    })?;

    if cli.json {
        let report = output::report_json(&pair, cli.application);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let delta_e = pair.delta_e(&cli.application.weights());
        println!("{}", output::format_delta_e(delta_e));
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(&cli) {
        let code = e.exit_code(cli.strict);
        if cli.json {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": code});
            let text = serde_json::to_string_pretty(&j).unwrap_or_default();
            if e.is_user_facing() {
                println!("{text}");
            } else {
                eprintln!("{text}");
            }
        } else if e.is_user_facing() {
            println!("{e}");
        } else {
            eprintln!("error: {e}");
        }
        process::exit(code);
    }
}
