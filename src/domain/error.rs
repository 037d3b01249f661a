use std::io;

use thiserror::Error;

use crate::domain::service::ConfigurationError;

/// Library-wide error type for initscript operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The service description cannot be rendered as given.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Embedded template could not be loaded or rendered.
    #[error("Failed to render template '{template}': {details}")]
    Template { template: String, details: String },
}

impl AppError {
    pub fn parse_error<W: Into<String>, D: ToString>(what: W, details: D) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping failures to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::Template { .. } => io::ErrorKind::Other,
        }
    }
}
