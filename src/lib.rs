//! `jscleanup` is a library and command-line tool that strips unwanted comments
//! from JavaScript sources and squashes the blank lines they leave behind,
//! producing a source map back to the untouched input.
//!
//! A transform works in three passes over a single text:
//! 1.  **Filter**: comments rejected by the [`CommentPolicy`] are blanked.
//! 2.  **Squash**: blank runs between tokens are capped to the configured number
//!     of empty lines and their line endings normalized.
//! 3.  **Render**: the edits are applied and, optionally, a v3 source map built.
//!
//! Template literals and strings are single tokens, so their contents are never
//! touched. Comments kept by the policy (licenses by default) stay verbatim.
//!
//! # Example: Library Usage
//!
//! ```
//! use jscleanup::{cleanup, Policy};
//!
//! let source = "/* @license MIT */\n// setup\n\n\nconst a = 1; // one\n";
//! let cleaned = cleanup(source, "app.js", &Policy::default())
//!     .unwrap()
//!     .expect("comments were removed");
//!
//! assert_eq!(cleaned.code, "/* @license MIT */\nconst a = 1;\n");
//! assert!(cleaned.map.is_some());
//!
//! // Clean input is reported as unchanged.
//! assert!(cleanup("const a = 1;\n", "app.js", &Policy::default())
//!     .unwrap()
//!     .is_none());
//! ```

// Make modules public if they contain public types used in the API
pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod signal;
pub mod tokenizer;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{CommentPolicy, Config, ConfigBuilder, LineEnding, OutputDestination, Policy};
pub use core_types::{Cleaned, FileFailure, FileInfo, RunSummary};
pub use errors::{Error, Result};
pub use processing::cleanup_with;

use crate::constants::STDIN_NAME;
use crate::errors::io_error_with_path;
use crate::tokenizer::JsLexer;
use rayon::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Cleans `source` with the built-in JavaScript scanner.
///
/// `file` names the source in error messages and in the source map.
///
/// # Returns
/// `Ok(None)` when the text needs no edits, otherwise the new text and, if
/// `policy.source_map` is set, its map.
///
/// # Errors
/// Returns [`Error::Parse`] when the text cannot be tokenized.
pub fn cleanup(source: &str, file: &str, policy: &Policy) -> Result<Option<Cleaned>> {
    let lexer = JsLexer::new(policy.ecma_version, policy.source_type);
    processing::cleanup_with(source, file, policy, &lexer)
}

/// Cleans one file from disk, or stdin when `path` is `None`.
fn clean_input(path: Option<&Path>, policy: &Policy) -> Result<FileInfo> {
    let (display_name, source) = match path {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
            (path.display().to_string(), source)
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| io_error_with_path(e, STDIN_NAME))?;
            (STDIN_NAME.to_string(), source)
        }
    };
    let cleaned = cleanup(&source, &display_name, policy)?;
    Ok(FileInfo {
        path: path.map(Path::to_path_buf),
        display_name,
        source,
        cleaned,
    })
}

/// Executes a complete command line run: read, clean, and write every input.
///
/// Inputs are cleaned in parallel and written in input order. A file that
/// fails is recorded in the returned summary and skipped; the others are
/// still written.
///
/// # Errors
/// Returns [`Error::Interrupted`] if `token` is cancelled before all inputs
/// were cleaned (nothing is written in that case), or an I/O error from
/// writing the results.
pub fn run(config: &Config, token: &CancellationToken) -> Result<RunSummary> {
    let outcomes: Vec<(String, Result<FileInfo>)> = if config.inputs.is_empty() {
        vec![(
            STDIN_NAME.to_string(),
            clean_input(None, &config.policy),
        )]
    } else {
        config
            .inputs
            .par_iter()
            .map(|path| {
                let name = path.display().to_string();
                if token.is_cancelled() {
                    return (name, Err(Error::Interrupted));
                }
                (name, clean_input(Some(path), &config.policy))
            })
            .collect()
    };

    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    let mut summary = RunSummary::default();
    let mut files = Vec::with_capacity(outcomes.len());
    for (display_name, outcome) in outcomes {
        match outcome {
            Ok(file) => {
                if file.is_changed() {
                    summary.changed += 1;
                } else {
                    summary.unchanged += 1;
                }
                files.push(file);
            }
            Err(error) => {
                log::debug!("{}: {}", display_name, error);
                summary.failures.push(FileFailure {
                    display_name,
                    error,
                });
            }
        }
    }

    output::write_outputs(&files, &config.output_destination)?;
    log::debug!(
        "Run complete: {} changed, {} unchanged, {} failed",
        summary.changed,
        summary.unchanged,
        summary.failures.len()
    );
    Ok(summary)
}
