//! A small ECMAScript scanner.
//!
//! It recognizes just enough of the lexical grammar to report exact comment and
//! token boundaries. Strings, template chunks and regular expressions are
//! consumed whole, so comment markers inside them are never taken for comments
//! and the line breaks inside template literals stay part of a token.

use super::{
    Comment, EcmaVersion, ParseError, SourceType, Token, TokenKind, TokenVisitor, Tokenizer,
};
use crate::constants::HASHBANG_ECMA_VERSION;

/// Keywords after which a `/` starts a regular expression literal.
const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "await",
    "case",
    "delete",
    "do",
    "else",
    "extends",
    "in",
    "instanceof",
    "new",
    "of",
    "return",
    "throw",
    "typeof",
    "void",
    "yield",
];

/// Keywords whose parenthesized header is followed by a statement, where a `/`
/// after the closing `)` starts a regular expression literal.
const STATEMENT_HEADER_KEYWORDS: &[&str] = &["if", "while", "for", "with"];

/// Built-in [`Tokenizer`] for JavaScript source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsLexer {
    ecma_version: EcmaVersion,
    source_type: SourceType,
}

impl JsLexer {
    pub fn new(ecma_version: EcmaVersion, source_type: SourceType) -> Self {
        Self {
            ecma_version,
            source_type,
        }
    }
}

impl Tokenizer for JsLexer {
    fn tokenize(&self, source: &str, visitor: &mut dyn TokenVisitor) -> Result<(), ParseError> {
        Scanner::new(source, *self).run(visitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Brace {
    Block,
    Template,
}

struct Scanner<'s> {
    src: &'s str,
    pos: usize,
    lexer: JsLexer,
    regex_allowed: bool,
    // A line terminator was seen since the last token (or we are at the start).
    newline_before: bool,
    braces: Vec<Brace>,
    // One entry per open `(`: whether it opened a statement header.
    parens: Vec<bool>,
    // The last token was a statement header keyword.
    header_keyword: bool,
}

impl<'s> Scanner<'s> {
    fn new(src: &'s str, lexer: JsLexer) -> Self {
        Self {
            src,
            pos: 0,
            lexer,
            regex_allowed: true,
            newline_before: true,
            braces: Vec::new(),
            parens: Vec::new(),
            header_keyword: false,
        }
    }

    fn run(mut self, visitor: &mut dyn TokenVisitor) -> Result<(), ParseError> {
        if self.lexer.ecma_version.year() >= HASHBANG_ECMA_VERSION && self.src.starts_with("#!") {
            self.line_comment(2, visitor);
        }
        loop {
            self.skip_space(visitor)?;
            if self.pos >= self.src.len() {
                let len = self.src.len();
                visitor.on_token(Token {
                    start: len,
                    end: len,
                    kind: TokenKind::Eof,
                });
                return Ok(());
            }
            let start = self.pos;
            let kind = self.read_token()?;
            self.newline_before = false;
            visitor.on_token(Token {
                start,
                end: self.pos,
                kind,
            });
        }
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos + offset).copied()
    }

    fn error(&self, offset: usize, message: impl Into<String>) -> ParseError {
        ParseError::at(self.src, offset, message)
    }

    fn skip_space(&mut self, visitor: &mut dyn TokenVisitor) -> Result<(), ParseError> {
        let script = self.lexer.source_type == SourceType::Script;
        while let Some(c) = self.peek() {
            let rest = self.rest();
            if is_line_terminator(c) {
                self.newline_before = true;
                self.pos += c.len_utf8();
            } else if is_space(c) {
                self.pos += c.len_utf8();
            } else if rest.starts_with("//") {
                self.line_comment(2, visitor);
            } else if rest.starts_with("/*") {
                self.block_comment(visitor)?;
            } else if script && rest.starts_with("<!--") {
                self.line_comment(4, visitor);
            } else if script && self.newline_before && rest.starts_with("-->") {
                self.line_comment(3, visitor);
            } else {
                break;
            }
        }
        Ok(())
    }

    fn line_comment(&mut self, marker_len: usize, visitor: &mut dyn TokenVisitor) {
        let start = self.pos;
        let body = start + marker_len;
        let end = self.src[body..]
            .find(is_line_terminator)
            .map_or(self.src.len(), |i| body + i);
        visitor.on_comment(Comment {
            block: false,
            text: &self.src[body..end],
            start,
            end,
        });
        self.pos = end;
    }

    fn block_comment(&mut self, visitor: &mut dyn TokenVisitor) -> Result<(), ParseError> {
        let start = self.pos;
        let body = start + 2;
        let close = self.src[body..]
            .find("*/")
            .map(|i| body + i)
            .ok_or_else(|| self.error(start, "Unterminated comment"))?;
        let text = &self.src[body..close];
        if text.contains(is_line_terminator) {
            self.newline_before = true;
        }
        visitor.on_comment(Comment {
            block: true,
            text,
            start,
            end: close + 2,
        });
        self.pos = close + 2;
        Ok(())
    }

    fn read_token(&mut self) -> Result<TokenKind, ParseError> {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return Ok(TokenKind::Eof);
        };
        let es2015 = self.lexer.ecma_version >= EcmaVersion::ES2015;
        let es2022 = self.lexer.ecma_version >= EcmaVersion::ES2022;

        let kind = match c {
            '"' | '\'' => {
                self.read_string(c as u8)?;
                TokenKind::String
            }
            '`' if es2015 => {
                self.pos += 1;
                self.read_template(start)?;
                TokenKind::Template
            }
            '}' if self.braces.last() == Some(&Brace::Template) => {
                self.braces.pop();
                self.pos += 1;
                self.read_template(start)?;
                TokenKind::Template
            }
            '/' if self.regex_allowed => {
                self.read_regex(start)?;
                TokenKind::Regex
            }
            '0'..='9' => {
                self.read_number();
                TokenKind::Number
            }
            '.' if matches!(self.byte_at(1), Some(b'0'..=b'9')) => {
                self.read_number();
                TokenKind::Number
            }
            '#' if es2022 => {
                self.pos += 1;
                if !self.read_word() {
                    return Err(self.error(start, "Unexpected character '#'"));
                }
                TokenKind::PrivateName
            }
            '`' | '#' => {
                return Err(self.error(start, format!("Unexpected character '{}'", c)));
            }
            c if is_identifier_start(c) => {
                self.read_word();
                TokenKind::Name
            }
            c if c.is_ascii_punctuation() => {
                self.read_punct(c);
                TokenKind::Punct
            }
            c => {
                return Err(self.error(start, format!("Unexpected character '{}'", c)));
            }
        };

        let src = self.src;
        let text = &src[start..self.pos];
        let opens_header = self.header_keyword;
        self.header_keyword =
            kind == TokenKind::Name && STATEMENT_HEADER_KEYWORDS.contains(&text);
        self.regex_allowed = match kind {
            TokenKind::Template => text.ends_with("${"),
            TokenKind::Name => REGEX_PRECEDING_KEYWORDS.contains(&text),
            TokenKind::Punct if text == "(" => {
                self.parens.push(opens_header);
                true
            }
            TokenKind::Punct if text == ")" => self.parens.pop().unwrap_or(false),
            TokenKind::Punct => !matches!(text, "]" | "++" | "--"),
            TokenKind::Eof => true,
            _ => false,
        };
        Ok(kind)
    }

    fn read_string(&mut self, quote: u8) -> Result<(), ParseError> {
        let start = self.pos;
        let src = self.src;
        let bytes = src.as_bytes();
        self.pos += 1;
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                _ if b == quote => {
                    self.pos += 1;
                    return Ok(());
                }
                b'\\' => {
                    // Line continuation `\` + CRLF skips both bytes.
                    let crlf = bytes.get(self.pos + 1) == Some(&b'\r')
                        && bytes.get(self.pos + 2) == Some(&b'\n');
                    self.pos += if crlf { 3 } else { 2 };
                }
                b'\n' | b'\r' => break,
                _ => self.pos += 1,
            }
        }
        Err(self.error(start, "Unterminated string constant"))
    }

    /// Reads a template chunk; `self.pos` is just past the opening backtick or `}`.
    fn read_template(&mut self, start: usize) -> Result<(), ParseError> {
        let src = self.src;
        let bytes = src.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b'`' => {
                    self.pos += 1;
                    return Ok(());
                }
                b'\\' => self.pos += 2,
                b'$' if bytes.get(self.pos + 1) == Some(&b'{') => {
                    self.pos += 2;
                    self.braces.push(Brace::Template);
                    return Ok(());
                }
                _ => self.pos += 1,
            }
        }
        Err(self.error(start, "Unterminated template"))
    }

    fn read_regex(&mut self, start: usize) -> Result<(), ParseError> {
        let src = self.src;
        let bytes = src.as_bytes();
        let mut in_class = false;
        self.pos += 1;
        loop {
            match bytes.get(self.pos) {
                None | Some(b'\n') | Some(b'\r') => {
                    return Err(self.error(start, "Unterminated regular expression"));
                }
                Some(b'\\') => {
                    let escaped = bytes.get(self.pos + 1);
                    let skip = matches!(escaped, Some(b) if *b != b'\n' && *b != b'\r');
                    self.pos += if skip { 2 } else { 1 };
                }
                Some(b'[') => {
                    in_class = true;
                    self.pos += 1;
                }
                Some(b']') => {
                    in_class = false;
                    self.pos += 1;
                }
                Some(b'/') if !in_class => {
                    self.pos += 1;
                    break;
                }
                Some(_) => self.pos += 1,
            }
        }
        // flags
        self.read_word();
        Ok(())
    }

    fn read_number(&mut self) {
        let src = self.src;
        let bytes = src.as_bytes();
        let radix_prefix = bytes[self.pos] == b'0'
            && matches!(
                bytes.get(self.pos + 1),
                Some(b'x' | b'X' | b'b' | b'B' | b'o' | b'O')
            );
        while let Some(&b) = bytes.get(self.pos) {
            if !(b.is_ascii_alphanumeric() || b == b'_' || b == b'.') {
                break;
            }
            self.pos += 1;
            let exponent = !radix_prefix && (b == b'e' || b == b'E');
            if exponent && matches!(bytes.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
        }
    }

    /// Consumes identifier characters, returning whether any were read.
    fn read_word(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.pos += 1;
                // `\u{...}` escapes; `\uXXXX` is plain identifier characters.
                if self.rest().starts_with("u{") {
                    let rest = self.rest();
                    self.pos += rest.find('}').map_or(rest.len(), |i| i + 1);
                }
            } else if is_identifier_part(c) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        self.pos > start
    }

    fn read_punct(&mut self, c: char) {
        let doubled = matches!(
            (c, self.byte_at(1)),
            ('+', Some(b'+')) | ('-', Some(b'-'))
        );
        match c {
            '{' => self.braces.push(Brace::Block),
            '}' => {
                self.braces.pop();
            }
            _ => {}
        }
        self.pos += if doubled { 2 } else { 1 };
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c == '\\' || c.is_alphabetic()
}

fn is_identifier_part(c: char) -> bool {
    c == '$' || c == '_' || c == '\u{200c}' || c == '\u{200d}' || c.is_alphanumeric()
}
