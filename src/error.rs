//! Error types for tally
//!
//! Operations return typed errors so they can be exercised in tests
//! without killing the test process; only the binary's outermost layer
//! turns an `Error` into a message on stderr and a process exit.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the tally CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Main error type for ledger operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not open store file: {0}")]
    StoreMissing(PathBuf),

    #[error("invalid record on line {line}: {source}")]
    ParseLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error("missing required task description")]
    EmptyDescription,

    #[error("no task matches id prefix '{0}'")]
    NoMatch(String),

    #[error("id prefix '{0}' matches more than one task")]
    AmbiguousMatch(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::StoreMissing(_)
            | Error::ParseLine { .. }
            | Error::EmptyDescription
            | Error::NoMatch(_)
            | Error::AmbiguousMatch(_)
            | Error::InvalidConfig(_)
            | Error::TomlParse(_)
            | Error::Io(_)
            | Error::Json(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, Error>;
