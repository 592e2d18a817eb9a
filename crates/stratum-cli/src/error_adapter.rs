//! Error adapter for converting StratumError to miette diagnostics.
//!
//! This module provides the bridge between the library's error types and
//! miette's rich diagnostic formatting used in the CLI. All user-facing
//! wording for layout failures lives here.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use stratum::{LayoutError, MAX_COUNT, StratumError, document::WriteError};

/// Adapter wrapping a [`StratumError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a StratumError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            StratumError::Io(_) => "stratum::io".to_string(),
            StratumError::Config(_) => "stratum::config".to_string(),
            StratumError::ParameterFormat { .. } => "stratum::input::format".to_string(),
            StratumError::Layout(err) => format!("stratum::layout::{}", err.code()),
            StratumError::Write(_) => "stratum::document".to_string(),
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            StratumError::ParameterFormat { field, .. } if field.ends_with("_count") => {
                format!("`--{}` takes a whole number, e.g. `4`", flag_name(field))
            }
            StratumError::ParameterFormat { field, .. } => {
                format!("`--{}` takes a number, e.g. `6000` or `3.5`", flag_name(field))
            }
            StratumError::Layout(LayoutError::InvalidParameter { .. }) => {
                format!(
                    "counts must be between 1 and {MAX_COUNT}; distances and ranges must be greater than zero"
                )
            }
            StratumError::Layout(LayoutError::GridCreationFailed { .. }) => {
                "use a grid range that is not negligible next to the grid distance".to_string()
            }
            StratumError::Layout(LayoutError::LevelCreationFailed { .. }) => {
                "reduce the level count or the level distance".to_string()
            }
            StratumError::Write(WriteError::DuplicateLabel(_)) => {
                "the document already holds an element with this name".to_string()
            }
            StratumError::Config(_) => {
                "check the file passed with `--config` or stratum/config.toml".to_string()
            }
            StratumError::Io(_) | StratumError::Write(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Turns an input field name such as `vert_count` into its flag `vert-count`.
fn flag_name(field: &str) -> String {
    field.replace('_', "-")
}
