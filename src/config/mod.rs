//! Defines the transform `Policy` and the application-level `Config`.
//!
//! Raw user settings (an options file, CLI flags) are accumulated by the
//! [`ConfigBuilder`] and normalized here into typed values, so the transform
//! passes never see an unvalidated option.

use crate::errors::ConfigError;
use crate::tokenizer::{Comment, EcmaVersion, SourceType};
use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use builder::ConfigBuilder;
pub use options::{CommentsOption, EcmaVersionOption, Options};
pub use parsing::{parse_comment_filters, parse_regex_literal};

mod builder;
mod builder_logic;
mod options;
mod parsing;
pub mod presets;

/// Which comments survive the transform.
#[derive(Debug, Clone)]
pub enum CommentPolicy {
    /// Keep every comment. The text is still tokenized so template
    /// literals are recognized, but nothing is blanked.
    KeepAll,
    /// Blank every comment.
    KeepNone,
    /// Keep a comment when its qualified text matches any pattern.
    Patterns(Vec<Regex>),
}

impl CommentPolicy {
    /// Decides whether `comment` is kept.
    ///
    /// Patterns are tested against the comment body prefixed with `*` for
    /// block comments or `/` for line comments, so a pattern can tell
    /// `/** doc */` from `/// doc` by its first character.
    pub fn keeps(&self, comment: &Comment<'_>) -> bool {
        match self {
            CommentPolicy::KeepAll => true,
            CommentPolicy::KeepNone => false,
            CommentPolicy::Patterns(patterns) => {
                let marker = if comment.block { '*' } else { '/' };
                let mut qualified = String::with_capacity(comment.text.len() + 1);
                qualified.push(marker);
                qualified.push_str(comment.text);
                patterns.iter().any(|re| re.is_match(&qualified))
            }
        }
    }

    pub fn keeps_all(&self) -> bool {
        matches!(self, CommentPolicy::KeepAll)
    }
}

impl Default for CommentPolicy {
    fn default() -> Self {
        CommentPolicy::Patterns(vec![presets::SOME.clone()])
    }
}

/// Target line terminator for every line break left in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Unix,
    /// `\r`
    Mac,
    /// `\r\n`
    Win,
}

impl LineEnding {
    /// The terminator itself.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Unix => "\n",
            LineEnding::Mac => "\r",
            LineEnding::Win => "\r\n",
        }
    }

    /// The option value naming this style.
    pub fn name(self) -> &'static str {
        match self {
            LineEnding::Unix => "unix",
            LineEnding::Mac => "mac",
            LineEnding::Win => "win",
        }
    }
}

impl FromStr for LineEnding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unix" => Ok(LineEnding::Unix),
            "mac" => Ok(LineEnding::Mac),
            "win" => Ok(LineEnding::Win),
            other => Err(ConfigError::InvalidValue {
                option: "lineEndings".to_string(),
                reason: format!("expected \"unix\", \"mac\" or \"win\", got \"{}\"", other),
            }),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The normalized options of one transform.
///
/// Immutable once built; a single `Policy` is shared by every file of a run.
#[derive(Debug, Clone)]
pub struct Policy {
    pub comments: CommentPolicy,
    /// Maximum number of consecutive empty lines. Negative means unlimited.
    pub max_empty_lines: i32,
    pub line_endings: LineEnding,
    /// Whether to produce a source map for edited files.
    pub source_map: bool,
    /// Whether the inside of preserved block comments is squashed like any
    /// other whitespace. When `false` only their line endings change.
    pub compact_comments: bool,
    pub ecma_version: EcmaVersion,
    pub source_type: SourceType,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            comments: CommentPolicy::default(),
            max_empty_lines: 0,
            line_endings: LineEnding::Unix,
            source_map: true,
            compact_comments: true,
            ecma_version: EcmaVersion::default(),
            source_type: SourceType::default(),
        }
    }
}

/// Represents the destination for the cleaned output.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path, with the map beside it.
    File(PathBuf),
    /// Replace each input file, with the map beside it.
    InPlace,
}

/// Everything a command line run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Files to clean, in output order. Empty means standard input.
    pub inputs: Vec<PathBuf>,
    /// Specifies where the cleaned text should be written.
    pub output_destination: OutputDestination,
    /// The transform applied to every input.
    pub policy: Policy,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            inputs: Vec::new(),
            output_destination: OutputDestination::Stdout,
            policy: Policy::default(),
        }
    }
}
