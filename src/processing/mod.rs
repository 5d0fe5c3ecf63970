//! Handles the transform of a single source text.
//!
//! The passes run in a fixed order:
//! 1. **Filter**: one tokenizer walk picks the comments the policy drops and
//!    records token boundaries (`comments`).
//! 2. **Squash**: blank runs between tokens, dropped comments included, are
//!    capped and their line endings normalized, through a position-preserving
//!    [`TextBuffer`] (`squash`). What is left of the dropped comments is then
//!    blanked, one space per character.
//! 3. **Render**: the buffer yields the final text and, when asked, a source
//!    map back to the untouched input (`source_map`).
//!
//! A transform that changes nothing returns `None`.

use crate::config::Policy;
use crate::core_types::{Cleaned, Span};
use crate::errors::Result;
use crate::tokenizer::Tokenizer;
use log::debug;

mod blank;
pub mod buffer;
pub mod comments;
pub mod source_map;
pub mod squash;

pub use blank::blank_block;
pub use buffer::{Mapping, TextBuffer};
pub use comments::{blank_removed, filter_comments, Filtered};
pub use squash::{normalize_line_endings, squash_lines};

/// Cleans `source` with an explicit tokenizer.
///
/// `file` names the source in error messages and in the source map.
///
/// # Returns
/// `Ok(None)` when the text is already clean, otherwise the new text and its
/// map (if `policy.source_map` is set).
///
/// # Errors
/// Returns [`Error::Parse`](crate::errors::Error::Parse) when the tokenizer
/// rejects the text.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file))]
pub fn cleanup_with(
    source: &str,
    file: &str,
    policy: &Policy,
    tokenizer: &dyn Tokenizer,
) -> Result<Option<Cleaned>> {
    debug!(
        "{}: keeping {} comments, max {} empty line(s)",
        file,
        if policy.comments.keeps_all() { "all" } else { "filtered" },
        policy.max_empty_lines
    );
    let filtered = filter_comments(source, file, &policy.comments, tokenizer)?;

    // Preserved comments are content when they must keep their inner layout.
    let content = if policy.compact_comments || filtered.preserved.is_empty() {
        filtered.tokens
    } else {
        merge_spans(&filtered.tokens, &filtered.preserved)
    };

    let mut buffer = TextBuffer::new(source);
    let mut changed = squash_lines(
        &mut buffer,
        &content,
        &filtered.removed,
        policy.line_endings,
        policy.max_empty_lines,
    );
    changed |= blank_removed(&mut buffer, &filtered.removed);
    if !policy.compact_comments {
        changed |= normalize_line_endings(&mut buffer, &filtered.preserved, policy.line_endings);
    }

    if !changed {
        debug!("{}: no changes", file);
        return Ok(None);
    }

    let cleaned = if policy.source_map {
        let (code, mappings) = buffer.render_with_map(true);
        let map = source_map::build_source_map(file, source, &code, &mappings);
        Cleaned {
            code,
            map: Some(map),
        }
    } else {
        Cleaned {
            code: buffer.render(),
            map: None,
        }
    };
    debug!(
        "{}: {} -> {} bytes",
        file,
        source.len(),
        cleaned.code.len()
    );
    Ok(Some(cleaned))
}

// Both inputs are sorted and disjoint from each other.
fn merge_spans(a: &[Span], b: &[Span]) -> Vec<Span> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    merged.extend_from_slice(a);
    merged.extend_from_slice(b);
    merged.sort_unstable();
    merged
}
