use std::io;

use thiserror::Error;

/// Library-wide error type for daykit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Day number could not be parsed.
    #[error("Invalid day number '{0}': must be a non-negative integer")]
    InvalidDayNumber(String),

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Map the error onto the closest `io::ErrorKind`; I/O errors keep their own kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::InvalidDayNumber(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::TemplateRender { .. } => io::ErrorKind::InvalidData,
        }
    }
}
