//! Error types for the koi workflow crate
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::schemas::EntityKind;

/// Result type alias for workflow operations
pub type Result<T> = std::result::Result<T, KoiError>;

/// Main error type for all workflow operations
#[derive(Debug, Error)]
pub enum KoiError {
    /// Status string is not in the registry for this entity kind
    #[error("Invalid {kind} status: {status:?}")]
    InvalidStatus { kind: EntityKind, status: String },

    /// Statuses are legal but the transition rule rejects the change
    #[error("Transition denied: {0}")]
    Denied(String),

    /// The fetch layer failed to reach the backend.
    ///
    /// Snapshot loading here is local; this is raised by HTTP clients
    /// built on the crate so their failures share the same codes.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// A referenced entity is missing from the loaded snapshot
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// CSV writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Operation was interrupted (e.g., by SIGINT)
    #[error("Operation interrupted")]
    Interrupted,

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl KoiError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            KoiError::InvalidStatus { .. } => "INVALID_STATUS",
            KoiError::Denied(_) => "DENIED",
            KoiError::NetworkFailure(_) => "NETWORK_FAILURE",
            KoiError::NotFound(_) => "NOT_FOUND",
            KoiError::InvalidJson(_) => "INVALID_JSON",
            KoiError::FileNotFound(_) => "FILE_NOT_FOUND",
            KoiError::ConfigError(_) => "CONFIG_ERROR",
            KoiError::Csv(_) => "CSV_ERROR",
            KoiError::Interrupted => "INTERRUPTED",
            KoiError::Io(_) => "IO_ERROR",
            KoiError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Shorthand for an `InvalidStatus` error
    pub fn invalid_status(kind: EntityKind, status: impl Into<String>) -> Self {
        KoiError::InvalidStatus {
            kind,
            status: status.into(),
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        KoiError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &KoiError) -> i32 {
    match error {
        KoiError::Interrupted => 130, // Standard Unix exit code for SIGINT
        _ => 1,
    }
}
