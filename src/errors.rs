//! Attest error handling.
//!
//! The assertion core never fails: a broken expectation is a value. Errors
//! only come from the outer surface, loading fixtures and writing reports.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for fixture loading and report output.
#[derive(Debug, Error, Diagnostic)]
pub enum AttestError {
    #[error("failed to read fixture {}", path.display())]
    #[diagnostic(code(attest::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse fixture {}: {message}", path.display())]
    #[diagnostic(
        code(attest::parse),
        help("a fixture needs a `suite` name and a list of `tests`")
    )]
    Parse { path: PathBuf, message: String },

    #[error("invalid assertion #{index} in test `{test}` of {}: {reason}", path.display())]
    #[diagnostic(
        code(attest::assertion),
        help("each assertion is a map with exactly one `equal` or `not_equal` key")
    )]
    InvalidAssertion {
        path: PathBuf,
        test: String,
        index: usize,
        reason: String,
    },

    #[error("unsupported fixture format: {}", path.display())]
    #[diagnostic(code(attest::format), help("use a .json, .yaml or .yml file"))]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to write output")]
    #[diagnostic(code(attest::output))]
    Output {
        #[source]
        source: io::Error,
    },
}

impl AttestError {
    /// Short classification used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AttestError::Io { .. } => "io",
            AttestError::Parse { .. } => "parse",
            AttestError::InvalidAssertion { .. } => "assertion",
            AttestError::UnsupportedFormat { .. } => "format",
            AttestError::Output { .. } => "output",
        }
    }
}

impl From<io::Error> for AttestError {
    fn from(source: io::Error) -> Self {
        AttestError::Output { source }
    }
}

pub type Result<T> = std::result::Result<T, AttestError>;
