//! The tokenizer seam.
//!
//! The cleanup passes never parse the grammar themselves. They only need the
//! boundaries of comments and of non-comment tokens, which a [`Tokenizer`]
//! reports to a [`TokenVisitor`] in source order. [`JsLexer`] is the built-in
//! implementation for ECMAScript text.

use crate::constants::LATEST_ECMA_VERSION;
use crate::errors::ConfigError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

mod lexer;

pub use lexer::JsLexer;
pub(crate) use lexer::is_space;

/// A comment found in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment<'s> {
    /// `true` for `/* ... */`, `false` for line comments.
    pub block: bool,
    /// The comment body, without its delimiters.
    pub text: &'s str,
    /// Offset of the first delimiter byte.
    pub start: usize,
    /// Offset just past the closing delimiter (or the line body).
    pub end: usize,
}

/// Broad classification of a non-comment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Name,
    PrivateName,
    Number,
    String,
    /// A template literal chunk: from a backtick or `}` up to the next
    /// `${` or closing backtick.
    Template,
    Regex,
    Punct,
    /// Synthetic token at the end of the input.
    Eof,
}

/// A non-comment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

/// Receives comments and tokens, in source order.
pub trait TokenVisitor {
    fn on_comment(&mut self, _comment: Comment<'_>) {}
    fn on_token(&mut self, _token: Token) {}
}

/// Supplies comment and token boundaries for a source text.
pub trait Tokenizer: Send + Sync {
    /// Walks `source`, reporting every comment and token to `visitor`.
    ///
    /// The last token reported on success is [`TokenKind::Eof`] at
    /// `source.len()`.
    fn tokenize(&self, source: &str, visitor: &mut dyn TokenVisitor) -> Result<(), ParseError>;
}

/// A malformed source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} ({line}:{column})")]
pub struct ParseError {
    pub message: String,
    /// Byte offset of the failure.
    pub offset: usize,
    /// 1-based line.
    pub line: usize,
    /// 0-based column, in characters.
    pub column: usize,
}

impl ParseError {
    /// Builds an error at `offset`, computing its line and column in `source`.
    pub fn at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line_start = before.rfind(['\n', '\r']).map_or(0, |i| i + 1);
        let line = 1 + count_line_breaks(before);
        let column = before[line_start..].chars().count();
        Self {
            message: message.into(),
            offset,
            line,
            column,
        }
    }
}

// `\r\n` counts once.
pub(crate) fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count()
}

/// Whether the source is an ES module or a classic script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceType {
    #[default]
    Module,
    Script,
}

impl FromStr for SourceType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "module" => Ok(Self::Module),
            "script" => Ok(Self::Script),
            other => Err(ConfigError::InvalidValue {
                option: "sourceType".to_string(),
                reason: format!("expected \"module\" or \"script\", got \"{}\"", other),
            }),
        }
    }
}

/// An ECMAScript edition, stored as its year (`2015` for ES6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EcmaVersion(u16);

impl EcmaVersion {
    pub const ES3: EcmaVersion = EcmaVersion(3);
    pub const ES5: EcmaVersion = EcmaVersion(5);
    pub const ES2015: EcmaVersion = EcmaVersion(2015);
    pub const ES2022: EcmaVersion = EcmaVersion(2022);
    pub const LATEST: EcmaVersion = EcmaVersion(LATEST_ECMA_VERSION);

    /// Accepts `3`, `5`, edition numbers `6..=16` and years `2015..=latest`.
    pub fn new(version: u32) -> Result<Self, ConfigError> {
        let latest = u32::from(LATEST_ECMA_VERSION);
        let year = match version {
            3 | 5 => version,
            6..=16 => version + 2009,
            v if (2015..=latest).contains(&v) => v,
            _ => {
                return Err(ConfigError::InvalidValue {
                    option: "ecmaVersion".to_string(),
                    reason: format!("unsupported ECMAScript version {}", version),
                })
            }
        };
        // `year` is bounded by LATEST_ECMA_VERSION above.
        Ok(Self(year as u16))
    }

    pub fn year(self) -> u16 {
        self.0
    }
}

impl Default for EcmaVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl FromStr for EcmaVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("latest") {
            return Ok(Self::LATEST);
        }
        s.parse::<u32>()
            .map_err(|_| ConfigError::InvalidValue {
                option: "ecmaVersion".to_string(),
                reason: format!("expected a number or \"latest\", got \"{}\"", s),
            })
            .and_then(Self::new)
    }
}

impl fmt::Display for EcmaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_position() {
        let src = "let a;\r\nlet b = 'x\nc";
        let err = ParseError::at(src, 16, "Unterminated string constant");
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 8);
        assert_eq!(err.to_string(), "Unterminated string constant (2:8)");
    }

    #[test]
    fn test_ecma_version_forms() {
        assert_eq!(EcmaVersion::new(6).unwrap().year(), 2015);
        assert_eq!(EcmaVersion::new(2020).unwrap().year(), 2020);
        assert_eq!(EcmaVersion::new(3).unwrap(), EcmaVersion::ES3);
        assert_eq!(EcmaVersion::new(5).unwrap(), EcmaVersion::ES5);
        assert!(EcmaVersion::ES3 < EcmaVersion::ES5);
        assert_eq!("latest".parse::<EcmaVersion>().unwrap(), EcmaVersion::LATEST);
        assert!(EcmaVersion::new(4).is_err());
        assert!(EcmaVersion::new(1999).is_err());
        assert!("next".parse::<EcmaVersion>().is_err());
    }

    #[test]
    fn test_source_type_from_str() {
        assert_eq!("script".parse::<SourceType>().unwrap(), SourceType::Script);
        let err = "commonjs".parse::<SourceType>().unwrap_err();
        assert!(err.to_string().contains("commonjs"));
    }
}
