//! Error types for graph loading, persistence, and solver setup.
//!
//! The search itself never fails once its configuration is valid; every
//! fallible path in the crate is I/O or input parsing.

use thiserror::Error;

/// Unified error type for all fallible `u-coloring` operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File could not be opened, read, or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input on a structurally significant line.
    ///
    /// `line` is 1-based. It is 0 when the failure is not tied to a line
    /// (e.g. a JSON graph with inconsistent lengths).
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Solver configuration rejected by [`SolverConfig::validate`](crate::ga::SolverConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates a parse error for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
