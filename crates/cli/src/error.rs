//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success, or a rejected hex color without `--strict`
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 12: rejected hex color with `--strict`
//! - 13: serialization error

use cie94_core::ColorError;
use std::fmt;

/// Errors produced by CLI operations.
pub enum CliError {
    /// A reference or sample argument is not a valid hex color.
    Input(ColorError),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// Rejected colors exit 0 unless `strict` is set.
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self {
            CliError::Input(_) if strict => 12,
            CliError::Input(_) => 0,
            CliError::Serialization(_) => 13,
        }
    }

    /// Whether the message belongs on stdout rather than stderr.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, CliError::Input(_))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Input(e) => write!(f, "{e}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        CliError::Input(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_exit_code_is_0_by_default() {
        let err = CliError::Input(ColorError::InvalidReference("FF000".into()));
        assert_eq!(err.exit_code(false), 0);
    }

    #[test]
    fn input_error_exit_code_is_12_when_strict() {
        let err = CliError::Input(ColorError::InvalidSample("FF000".into()));
        assert_eq!(err.exit_code(true), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(false), 13);
        assert_eq!(err.exit_code(true), 13);
    }

    #[test]
    fn input_error_message_names_role_and_value() {
        let err = CliError::from(ColorError::InvalidReference("#GG0000".into()));
        assert_eq!(
            err.to_string(),
            "Reference color is not a valid hexcolor: '#GG0000'."
        );
        assert!(err.is_user_facing());
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(false), 13);
        assert!(!cli_err.is_user_facing());
    }
}
