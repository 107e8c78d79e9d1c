//! Error types for literal generation

use std::io;

use thiserror::Error;

/// Main error type for bin2cpp operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The input path or token could not be opened
    #[error("cannot open input {path}: {source}")]
    OpenInput {
        path: String,
        #[source]
        source: io::Error,
    },
    /// The output path or token could not be opened
    #[error("cannot open output {path}: {source}")]
    OpenOutput {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Identifier is empty after derivation
    #[error("identifier is empty; pass a non-empty --ident")]
    EmptyIdentifier,
    /// Identifier contains characters outside `[A-Za-z0-9_]`
    #[error("invalid identifier {0:?}: only ASCII letters, digits and '_' are allowed")]
    InvalidIdentifier(String),
    /// Line length of zero
    #[error("line length must be at least 1")]
    InvalidLineLength,
    /// Unsupported escape sequence in a literal fragment
    #[error("invalid escape sequence: {0}")]
    InvalidEscape(String),
    /// Generated source does not have the expected layout
    #[error("invalid generated source: {0}")]
    InvalidSource(String),
}

/// A specialized `Result` type for bin2cpp operations
pub type Result<T> = std::result::Result<T, Error>;
