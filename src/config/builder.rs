// src/config/builder.rs

use super::{
    builder_logic::{determine_output_destination, validate_builder_options},
    parse_comment_filters, CommentsOption, Config, EcmaVersionOption, LineEnding, Options, Policy,
};
use crate::cli::Cli;
use crate::errors::{ConfigError, Result};
use crate::tokenizer::SourceType;
use std::path::PathBuf;

/// A builder for creating a `Config` instance.
///
/// Settings are kept raw until [`build`](Self::build), which validates them all
/// at once. Values given through an options file sit beneath values given
/// directly, so the command line always wins.
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(crate) inputs: Vec<PathBuf>,
    pub(crate) comments: Option<CommentsOption>,
    pub(crate) max_empty_lines: Option<i32>,
    pub(crate) line_endings: Option<String>,
    pub(crate) source_map: Option<bool>,
    pub(crate) compact_comments: Option<bool>,
    pub(crate) ecma_version: Option<EcmaVersionOption>,
    pub(crate) source_type: Option<String>,
    pub(crate) output_file: Option<PathBuf>,
    pub(crate) in_place: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding the settings of an options object.
    pub fn from_options(options: Options) -> Self {
        Self::new().options(options)
    }

    /// Creates a builder from parsed command line arguments.
    ///
    /// When `--options` names a file it is loaded first and the flags are
    /// layered on top of it.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut builder = match &cli.options {
            Some(path) => Self::from_options(Options::load(path)?),
            None => Self::new(),
        };
        builder.inputs = cli.files.clone();
        if let Some(filters) = &cli.comments {
            builder.comments = Some(CommentsOption::Filters(filters.clone()));
        }
        if let Some(max) = cli.max_empty_lines {
            builder.max_empty_lines = Some(max);
        }
        if let Some(eol) = cli.line_endings {
            builder.line_endings = Some(eol.name().to_string());
        }
        if cli.no_sourcemap {
            builder.source_map = Some(false);
        }
        if cli.no_compact_comments {
            builder.compact_comments = Some(false);
        }
        if let Some(version) = &cli.ecma_version {
            builder.ecma_version = Some(EcmaVersionOption::Name(version.clone()));
        }
        if let Some(source_type) = cli.source_type {
            builder.source_type = Some(source_type_name(source_type).to_string());
        }
        builder.output_file = cli.output.clone();
        if cli.in_place {
            builder.in_place = Some(true);
        }
        Ok(builder)
    }

    /// Fills every setting not given yet from `options`.
    pub fn options(mut self, options: Options) -> Self {
        self.comments = self.comments.or(options.comments);
        self.max_empty_lines = self.max_empty_lines.or(options.max_empty_lines);
        self.line_endings = self.line_endings.or(options.line_endings);
        self.source_map = self.source_map.or(options.sourcemap);
        self.compact_comments = self.compact_comments.or(options.compact_comments);
        self.ecma_version = self.ecma_version.or(options.ecma_version);
        self.source_type = self.source_type.or(options.source_type);
        self
    }

    /// Adds a file to clean.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Sets the comment filters: `"all"`, `"none"`, preset names or
    /// `/regex/flags` literals.
    pub fn comments<S: Into<String>>(mut self, filters: impl IntoIterator<Item = S>) -> Self {
        self.comments = Some(CommentsOption::Filters(
            filters.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Keeps (`true`) or blanks (`false`) every comment.
    pub fn keep_comments(mut self, keep: bool) -> Self {
        self.comments = Some(CommentsOption::Flag(keep));
        self
    }

    pub fn max_empty_lines(mut self, max: i32) -> Self {
        self.max_empty_lines = Some(max);
        self
    }

    pub fn line_endings(mut self, eol: LineEnding) -> Self {
        self.line_endings = Some(eol.name().to_string());
        self
    }

    pub fn source_map(mut self, enabled: bool) -> Self {
        self.source_map = Some(enabled);
        self
    }

    pub fn compact_comments(mut self, enabled: bool) -> Self {
        self.compact_comments = Some(enabled);
        self
    }

    pub fn ecma_version(mut self, version: u32) -> Self {
        self.ecma_version = Some(EcmaVersionOption::Number(version));
        self
    }

    pub fn source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type_name(source_type).to_string());
        self
    }

    /// Writes the cleaned text to `path` instead of standard output.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Rewrites every input file in place.
    pub fn in_place(mut self, enabled: bool) -> Self {
        self.in_place = Some(enabled);
        self
    }

    /// Normalizes the transform settings into a [`Policy`].
    pub fn build_policy(&self) -> Result<Policy, ConfigError> {
        let comments = parse_comment_filters(self.comments.as_ref())?;
        let line_endings = self
            .line_endings
            .as_deref()
            .map(str::parse::<LineEnding>)
            .transpose()?
            .unwrap_or_default();
        let ecma_version = self
            .ecma_version
            .as_ref()
            .map(EcmaVersionOption::resolve)
            .transpose()?
            .unwrap_or_default();
        let source_type = self
            .source_type
            .as_deref()
            .map(str::parse::<SourceType>)
            .transpose()?
            .unwrap_or_default();

        Ok(Policy {
            comments,
            max_empty_lines: self.max_empty_lines.unwrap_or(0),
            line_endings,
            source_map: self.source_map.unwrap_or(true),
            compact_comments: self.compact_comments.unwrap_or(true),
            ecma_version,
            source_type,
        })
    }

    /// Validates every setting and builds the final `Config`.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;
        let policy = self.build_policy()?;
        let output_destination = determine_output_destination(self.output_file, self.in_place);
        log::debug!(
            "Built config: {} input(s), destination {:?}, policy {:?}",
            self.inputs.len(),
            output_destination,
            policy
        );
        Ok(Config {
            inputs: self.inputs,
            output_destination,
            policy,
        })
    }
}

impl Policy {
    /// Normalizes an options object, the way an options file is read.
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        ConfigBuilder::from_options(options.clone()).build_policy()
    }
}

impl TryFrom<&Cli> for Config {
    type Error = crate::errors::Error;

    fn try_from(cli: &Cli) -> Result<Self> {
        ConfigBuilder::from_cli(cli)?.build()
    }
}

fn source_type_name(source_type: SourceType) -> &'static str {
    match source_type {
        SourceType::Module => "module",
        SourceType::Script => "script",
    }
}
