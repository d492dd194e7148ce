//! Error types for the comment collector
//!
//! Every fallible operation in the crate returns `Result<T, Error>`.
//! None of these errors are retried: any of them ends the current run.

use thiserror::Error;

/// The main error type for the collector
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    // ============================================================================
    // Input & Configuration Errors
    // ============================================================================
    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {message}")]
    Output { message: String },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The network exchange could not complete
    TransportFailure,
    /// The payload did not have the expected page shape
    MalformedResponse,
    /// A required input (the username) was not supplied
    MissingInput,
    /// Invalid configuration
    Config,
    /// The result document could not be written
    Output,
}

impl Error {
    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a missing input error
    pub fn missing_input(field: impl Into<String>) -> Self {
        Self::MissingInput {
            field: field.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Transport(e) if e.is_decode() => ErrorCategory::MalformedResponse,
            Error::Transport(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_) => {
                ErrorCategory::TransportFailure
            }
            Error::MalformedResponse { .. } => ErrorCategory::MalformedResponse,
            Error::MissingInput { .. } => ErrorCategory::MissingInput,
            Error::Config { .. } | Error::YamlParse(_) => ErrorCategory::Config,
            Error::JsonSerialize(_) | Error::Io(_) | Error::Output { .. } => {
                ErrorCategory::Output
            }
        }
    }

    /// Check if this error is a transport failure
    pub fn is_transport_failure(&self) -> bool {
        self.category() == ErrorCategory::TransportFailure
    }
}

/// Result type alias for the collector
pub type Result<T> = std::result::Result<T, Error>;
