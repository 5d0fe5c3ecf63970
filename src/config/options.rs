// src/config/options.rs

use crate::errors::{io_error_with_path, ConfigError, Result};
use crate::tokenizer::EcmaVersion;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The raw option object, as written in a JSON options file.
///
/// Every field is optional; missing fields take the [`Policy`](super::Policy)
/// defaults. Keys this tool does not know (such as a bundler's
/// `include`/`exclude` lists) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub comments: Option<CommentsOption>,
    pub max_empty_lines: Option<i32>,
    #[serde(alias = "normalizeEols", alias = "eolType")]
    pub line_endings: Option<String>,
    #[serde(alias = "sourceMap")]
    pub sourcemap: Option<bool>,
    pub compact_comments: Option<bool>,
    pub ecma_version: Option<EcmaVersionOption>,
    pub source_type: Option<String>,
}

/// The shapes accepted for `comments`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CommentsOption {
    /// `true` keeps every comment, `false` none.
    Flag(bool),
    /// `"all"`, `"none"`, a preset name or a `/regex/flags` literal.
    Filter(String),
    /// Presets and `/regex/flags` literals; a comment is kept if any matches.
    Filters(Vec<String>),
}

/// `ecmaVersion` as a number (`6`, `2020`) or a name (`"latest"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EcmaVersionOption {
    Number(u32),
    Name(String),
}

impl EcmaVersionOption {
    pub fn resolve(&self) -> Result<EcmaVersion, ConfigError> {
        match self {
            EcmaVersionOption::Number(n) => EcmaVersion::new(*n),
            EcmaVersionOption::Name(name) => name.parse(),
        }
    }
}

impl Options {
    /// Parses an options object from JSON text.
    pub fn from_json(text: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::InvalidOptionsFile {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// Reads and parses an options file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
        log::debug!("Loaded options file: {}", path.display());
        Ok(Self::from_json(&text, &path.display().to_string())?)
    }
}
