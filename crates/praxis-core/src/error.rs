//! Error types for praxis-core

use thiserror::Error;

/// Result type alias using praxis-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Praxis
#[derive(Error, Debug)]
pub enum Error {
    /// A setting resolved from the environment could not be parsed
    #[error("Invalid value for setting {name}: {value:?} ({reason})")]
    InvalidSetting {
        name: String,
        value: String,
        reason: String,
    },

    /// Data validation failed
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Data processing failed
    #[error("Processing failed: {message}")]
    Processing { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid setting error
    pub fn invalid_setting(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidSetting {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }
}
