//! Error types for the inGen domain.
//!
//! Uses `thiserror` for ergonomic error definitions. The top-level [`Error`]
//! separates what a caller has to react to differently: a broken configuration,
//! a missing adaptation log, a failing backend, or output that could not be written.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all inGen operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Log file error: {0}")]
    FileAccess(#[from] FileAccessError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Short machine-friendly label for the error category.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Config(_) => "configuration",
            Error::FileAccess(_) => "file_access",
            Error::Backend(_) => "backend",
            Error::Output(_) => "output",
        }
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// A required setting is missing, malformed, or names an unknown backend.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Credential required: [{section}] {option} is missing or empty")]
    MissingSetting { section: String, option: String },

    #[error("Environment variable {0} is missing or empty")]
    MissingEnv(String),

    #[error("Unsupported LLM backend: {0}")]
    UnsupportedBackend(String),

    #[error("Invalid value for [{section}] {option}: {reason}")]
    InvalidValue {
        section: String,
        option: String,
        reason: String,
    },
}

/// The adaptation log could not be opened or read.
#[derive(Debug, Clone, Error)]
#[error("Cannot read adaptation log at {path}: {reason}")]
pub struct FileAccessError {
    pub path: PathBuf,
    pub reason: String,
}

/// The selected backend failed while generating.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("API request failed: {message} (status: {status_code})")]
    Api { status_code: u16, message: String },

    #[error("Rate limited by backend")]
    RateLimited,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
