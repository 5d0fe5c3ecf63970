//! Comment filtering.
//!
//! A single tokenizer walk decides the fate of every comment and records the
//! token boundaries the line squasher needs later. Removed comments are only
//! recorded here. The squasher treats them as whitespace, and whatever part of
//! them it leaves in place is blanked afterwards by [`blank_removed`].

use super::blank::blank_block;
use super::buffer::TextBuffer;
use crate::config::CommentPolicy;
use crate::core_types::Span;
use crate::errors::{Error, Result};
use crate::tokenizer::{Comment, Token, TokenKind, TokenVisitor, Tokenizer};

/// Comment and token boundaries of a source text.
#[derive(Debug, Clone, Default)]
pub struct Filtered {
    /// Spans of the non-comment tokens, in source order.
    pub tokens: Vec<Span>,
    /// Spans of the block comments that were kept, in source order.
    pub preserved: Vec<Span>,
    /// Spans of the comments to remove, in source order.
    pub removed: Vec<Span>,
}

impl Filtered {
    /// Whether any comment is to be removed.
    pub fn is_changed(&self) -> bool {
        !self.removed.is_empty()
    }
}

struct Collector<'p> {
    policy: &'p CommentPolicy,
    filtered: Filtered,
}

impl TokenVisitor for Collector<'_> {
    fn on_comment(&mut self, comment: Comment<'_>) {
        let span = Span::new(comment.start, comment.end);
        if !self.policy.keeps(&comment) {
            self.filtered.removed.push(span);
        } else if comment.block {
            self.filtered.preserved.push(span);
        }
    }

    fn on_token(&mut self, token: Token) {
        if token.kind != TokenKind::Eof {
            self.filtered.tokens.push(Span::new(token.start, token.end));
        }
    }
}

/// Tokenizes `source` and sorts its comments into kept and removed.
///
/// # Errors
/// Returns [`Error::Parse`] naming `file` when the tokenizer rejects the text.
pub fn filter_comments(
    source: &str,
    file: &str,
    policy: &CommentPolicy,
    tokenizer: &dyn Tokenizer,
) -> Result<Filtered> {
    let mut collector = Collector {
        policy,
        filtered: Filtered::default(),
    };
    tokenizer
        .tokenize(source, &mut collector)
        .map_err(|source| Error::Parse {
            file: file.to_string(),
            source,
        })?;

    let filtered = collector.filtered;
    log::debug!(
        "{}: {} comment(s) removed, {} block comment(s) kept",
        file,
        filtered.removed.len(),
        filtered.preserved.len()
    );
    Ok(filtered)
}

/// Blanks the parts of `removed` comments that no earlier edit replaced.
///
/// Every character becomes one space and line breaks stay, so code after a
/// comment keeps its column. Returns `true` if anything was blanked.
pub fn blank_removed(buffer: &mut TextBuffer<'_>, removed: &[Span]) -> bool {
    let text = buffer.original();
    let mut changed = false;
    for span in removed {
        for part in buffer.untouched(span.start, span.end) {
            buffer.overwrite(part.start, part.end, blank_block(&text[part.start..part.end]));
            changed = true;
        }
    }
    changed
}
