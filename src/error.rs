//! Error types for agenda
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, unknown agenda or contact, invalid field)
//! - 4: Operation failed (agenda file could not be read, written or removed)

use std::path::PathBuf;
use thiserror::Error;

use crate::validate::ValidationError;

/// Exit codes for the agenda CLI
pub mod exit_codes {
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for agenda operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("No agenda selected")]
    NoAgendaSelected,

    #[error("Agenda not found: {0}")]
    AgendaNotFound(PathBuf),

    #[error("Agenda already exists: {0}")]
    AgendaExists(PathBuf),

    #[error("No contact matches '{0}'")]
    ContactNotFound(String),

    #[error("Contact already exists: {0}")]
    ContactExists(String),

    #[error("'{fragment}' matches {} contacts", .candidates.len())]
    AmbiguousContact {
        fragment: String,
        candidates: Vec<String>,
    },

    // Operation failures (exit code 4)
    #[error("Agenda storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Wrap an I/O failure with the agenda path it happened on
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Storage {
            path: path.into(),
            source,
        }
    }

    /// Tag a validation failure with the field it came from
    pub fn invalid_field(field: &'static str, source: ValidationError) -> Self {
        Error::InvalidField { field, source }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::InvalidConfig(_)
            | Error::InvalidArgument(_)
            | Error::InvalidField { .. }
            | Error::NoAgendaSelected
            | Error::AgendaNotFound(_)
            | Error::AgendaExists(_)
            | Error::ContactNotFound(_)
            | Error::ContactExists(_)
            | Error::AmbiguousContact { .. } => exit_codes::USER_ERROR,

            // Operation failures
            Error::Storage { .. }
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured context for JSON error bodies
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::AmbiguousContact {
                fragment,
                candidates,
            } => Some(serde_json::json!({
                "fragment": fragment,
                "candidates": candidates,
            })),
            Error::InvalidField { field, .. } => Some(serde_json::json!({ "field": field })),
            Error::AgendaNotFound(path) | Error::AgendaExists(path) => {
                Some(serde_json::json!({ "path": path }))
            }
            Error::Storage { path, .. } => Some(serde_json::json!({ "path": path })),
            _ => None,
        }
    }
}

/// Result type alias for agenda operations
pub type Result<T> = std::result::Result<T, Error>;

