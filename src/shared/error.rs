use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow callers (CI jobs, compliance pipelines) to distinguish
/// between "nothing found" and genuine failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested item resolved, or at least one did (partial success)
    Success = 0,
    /// No component produced a license, or the license id is unknown
    NotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, snapshot, registry, I/O, input validation)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Engine errors surfaced to callers.
///
/// Resolution misses are deliberately absent: an unresolvable component is an
/// empty result item, and an unknown license id is a not-found outcome.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Failed to initialize the SPDX license registry\nDetails: {details}")]
    RegistryInit { details: String },

    #[error("Failed to load license data snapshot: {path}\nDetails: {details}\n\n💡 Hint: The snapshot must be a JSON document with components, purl_licenses and licenses tables")]
    SnapshotLoad { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },
}

impl EngineError {
    pub fn invalid_input(field: &str, reason: &str) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
