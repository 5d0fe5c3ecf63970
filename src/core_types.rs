// src/core_types.rs

//! Plain data types shared by the transform passes and the CLI pipeline.

use crate::errors::{Error, Result};
use sourcemap::SourceMap;
use std::path::PathBuf;

/// A half-open byte range `[start, end)` into a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} is past its end {}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The output of a transform that edited its input.
///
/// A transform that found nothing to change returns `None` instead, so callers
/// can keep the original text (and any map they already have) untouched.
#[derive(Debug, Clone)]
pub struct Cleaned {
    /// The rewritten source text.
    pub code: String,
    /// Map from `code` back to the original text, when the policy asks for one.
    pub map: Option<SourceMap>,
}

impl Cleaned {
    /// Serializes the source map, if any, to its JSON form.
    pub fn map_json(&self) -> Result<Option<String>> {
        self.map
            .as_ref()
            .map(crate::processing::source_map::to_json)
            .transpose()
    }
}

/// One input handled by the command line pipeline.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Path of the input, `None` when the source was read from stdin.
    pub path: Option<PathBuf>,
    /// Name used in diagnostics and as the source map `sources` entry.
    pub display_name: String,
    /// The original text.
    pub source: String,
    /// The transform result; `None` means the file needed no edits.
    pub cleaned: Option<Cleaned>,
}

impl FileInfo {
    /// Returns the final text: the cleaned code, or the original when unchanged.
    pub fn output_code(&self) -> &str {
        self.cleaned
            .as_ref()
            .map_or(self.source.as_str(), |c| c.code.as_str())
    }

    pub fn is_changed(&self) -> bool {
        self.cleaned.is_some()
    }
}

/// An input that could not be cleaned.
#[derive(Debug)]
pub struct FileFailure {
    pub display_name: String,
    pub error: Error,
}

/// Outcome of a command line run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Inputs whose text changed.
    pub changed: usize,
    /// Inputs that were already clean.
    pub unchanged: usize,
    /// Inputs that failed, in input order.
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.changed + self.unchanged + self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
