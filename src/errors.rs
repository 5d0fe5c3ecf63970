//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that can
//! occur while cleaning a source file, and `ConfigError` for problems found while
//! normalizing user options. Both carry more context than generic I/O or
//! `anyhow` errors.

use crate::tokenizer::ParseError;
use thiserror::Error;

/// Errors returned by the `jscleanup` library.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file access (read or write).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// The options could not be normalized into a policy.
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- Transform Errors ---
    /// The tokenizer rejected the source text.
    #[error("{source} in {file}")]
    Parse {
        /// Name of the file being cleaned, for diagnostics.
        file: String,
        /// The tokenizer failure.
        #[source]
        source: ParseError,
    },

    /// The generated source map could not be serialized.
    #[error("Failed to write source map: {0}")]
    SourceMap(#[from] sourcemap::Error),

    // --- Signal Handling ---
    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Errors raised while validating and normalizing options.
///
/// These are reported before any text is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A comment filter that is neither a preset name nor a `/regex/` literal.
    #[error("unknown comment filter \"{0}\"")]
    UnknownCommentFilter(String),

    /// A `/regex/` literal whose pattern does not compile.
    #[error("invalid comment filter regex '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// An option received a value outside its domain.
    #[error("invalid value for '{option}': {reason}")]
    InvalidValue { option: String, reason: String },

    /// An options file that is not a valid options object.
    #[error("invalid options file '{path}': {reason}")]
    InvalidOptionsFile { path: String, reason: String },

    /// Two options that cannot be combined.
    #[error("cannot use '{option1}' together with '{option2}'")]
    Conflict { option1: String, option2: String },
}

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
