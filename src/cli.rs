// src/cli.rs

use crate::config::LineEnding;
use crate::tokenizer::SourceType;
use clap::Parser;
use std::path::PathBuf;

/// Strips comments and squashes blank lines in JavaScript sources.
///
/// jscleanup removes the comments a filter does not select, collapses runs of
/// empty lines, trims trailing whitespace and normalizes line endings, without
/// ever touching code tokens or the contents of string and template literals.
/// A source map from the cleaned text back to the original is written next to
/// each output file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Files to clean. Reads standard input when none are given.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    // --- Transform Options ---
    /// Comments to keep: "all", "none", preset names (license, some, jsdoc, jslint, jshint,
    /// eslint, jscs, istanbul, srcmaps, ts3s) or /regex/flags literals. Repeatable or
    /// comma-separated. Default is "some".
    #[arg(
        short = 'c',
        long,
        value_name = "FILTER",
        action = clap::ArgAction::Append,
        value_delimiter = ','
    )]
    pub comments: Option<Vec<String>>,

    /// Maximum number of consecutive empty lines to keep (negative keeps them all).
    #[arg(short = 'l', long, value_name = "N", allow_negative_numbers = true)]
    pub max_empty_lines: Option<i32>,

    /// Line ending style for the output.
    #[arg(short = 'e', long, value_name = "STYLE", value_enum)]
    pub line_endings: Option<LineEnding>,

    /// Do not write source maps.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_sourcemap: bool,

    /// Keep the inside of preserved block comments as is (only line endings change).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_compact_comments: bool,

    /// ECMAScript version of the input: 3, 5, 6..16, 2015 and later, or "latest".
    #[arg(long, value_name = "VERSION")]
    pub ecma_version: Option<String>,

    /// Parse the input as an ES module or a classic script.
    #[arg(long, value_name = "TYPE", value_enum)]
    pub source_type: Option<SourceType>,

    /// Read options from a JSON file. Flags given on the command line take precedence.
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    // --- Output Options ---
    /// Write the output to a file instead of stdout (the map goes to FILE.map).
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rewrite the input files in place (maps go to INPUT.map).
    #[arg(short = 'i', long, action = clap::ArgAction::SetTrue, conflicts_with = "output")]
    pub in_place: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn test_comments_are_repeatable_and_split() {
        let cli = Cli::parse_from(["jscleanup", "-c", "license,jsdoc", "-c", "srcmaps", "a.js"]);
        assert_eq!(
            cli.comments,
            Some(vec![
                "license".to_string(),
                "jsdoc".to_string(),
                "srcmaps".to_string()
            ])
        );
        assert_eq!(cli.files, vec![PathBuf::from("a.js")]);
    }

    #[test]
    fn test_negative_max_empty_lines() {
        let cli = Cli::parse_from(["jscleanup", "--max-empty-lines", "-1"]);
        assert_eq!(cli.max_empty_lines, Some(-1));
        assert!(cli.files.is_empty());
    }

    #[test]
    fn test_enum_values() {
        let cli = Cli::parse_from(["jscleanup", "-e", "win", "--source-type", "script"]);
        assert_eq!(cli.line_endings, Some(LineEnding::Win));
        assert_eq!(cli.source_type, Some(SourceType::Script));
        assert!(Cli::try_parse_from(["jscleanup", "-e", "dos"]).is_err());
    }

    #[test]
    fn test_output_conflicts_with_in_place() {
        assert!(Cli::try_parse_from(["jscleanup", "-o", "x.js", "-i", "a.js"]).is_err());
    }
}
