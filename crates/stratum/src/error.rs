//! Error types for Stratum operations.
//!
//! [`StratumError`] wraps everything that can go wrong between reading raw
//! parameters and writing a layout into a document.

use std::io;

use thiserror::Error;

use stratum_core::LayoutError;

use crate::document::WriteError;

/// The main error type for Stratum operations.
#[derive(Debug, Error)]
pub enum StratumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A raw input value could not be converted to a number.
    #[error("Invalid number format for `{field}`: {value:?}")]
    ParameterFormat { field: &'static str, value: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Document error: {0}")]
    Write(#[from] WriteError),
}

impl StratumError {
    /// Create a new `ParameterFormat` error for the given input field.
    pub fn parameter_format(field: &'static str, value: impl Into<String>) -> Self {
        Self::ParameterFormat {
            field,
            value: value.into(),
        }
    }
}
