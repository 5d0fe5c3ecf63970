//! An editable overlay over an immutable source string.
//!
//! Edits are recorded against offsets of the original text and never applied
//! in place, so every rendered byte can still be traced back to the range it
//! came from. All offsets are byte offsets and must fall on `char` boundaries.

use crate::core_types::Span;
use std::collections::BTreeMap;

/// One point of the generated-to-original position table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    /// Byte offset in the rendered text.
    pub generated: usize,
    /// Byte offset in the original text.
    pub original: usize,
}

#[derive(Debug, Clone)]
struct Edit {
    end: usize,
    content: String,
}

/// A position-preserving text buffer.
#[derive(Debug, Clone)]
pub struct TextBuffer<'a> {
    original: &'a str,
    // Keyed by start offset. Ranges never overlap.
    edits: BTreeMap<usize, Edit>,
}

impl<'a> TextBuffer<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            edits: BTreeMap::new(),
        }
    }

    /// The text the buffer was created from.
    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Whether any edit has been recorded.
    pub fn has_changes(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Replaces the original range `[start, end)` with `replacement`.
    ///
    /// # Panics
    /// Panics if the range is out of bounds, is not on `char` boundaries, or
    /// overlaps a range edited before. Those are defects in the caller, not
    /// recoverable conditions.
    pub fn overwrite(&mut self, start: usize, end: usize, replacement: impl Into<String>) {
        let len = self.original.len();
        assert!(
            start <= end && end <= len,
            "overwrite range {}..{} is out of bounds (length {})",
            start,
            end,
            len
        );
        assert!(
            self.original.is_char_boundary(start) && self.original.is_char_boundary(end),
            "overwrite range {}..{} splits a character",
            start,
            end
        );
        if let Some((&prev_start, prev)) = self.edits.range(..=start).next_back() {
            assert!(
                prev_start < start && prev.end <= start,
                "overwrite range {}..{} overlaps edit {}..{}",
                start,
                end,
                prev_start,
                prev.end
            );
        }
        if let Some((&next_start, next)) = self.edits.range(start + 1..).next() {
            assert!(
                end <= next_start,
                "overwrite range {}..{} overlaps edit {}..{}",
                start,
                end,
                next_start,
                next.end
            );
        }
        self.edits.insert(
            start,
            Edit {
                end,
                content: replacement.into(),
            },
        );
    }

    /// Returns the current content of the original range `[start, end)`,
    /// with earlier edits inside it applied.
    ///
    /// # Panics
    /// Panics if the range cuts through an edited range.
    pub fn slice(&self, start: usize, end: usize) -> String {
        assert!(
            start <= end && end <= self.original.len(),
            "slice range {}..{} is out of bounds",
            start,
            end
        );
        if let Some((&prev_start, prev)) = self.edits.range(..start).next_back() {
            assert!(
                prev.end <= start,
                "slice range {}..{} splits edit {}..{}",
                start,
                end,
                prev_start,
                prev.end
            );
        }
        let mut out = String::with_capacity(end - start);
        let mut cursor = start;
        for (&edit_start, edit) in self.edits.range(start..end) {
            assert!(
                edit.end <= end,
                "slice range {}..{} splits edit {}..{}",
                start,
                end,
                edit_start,
                edit.end
            );
            out.push_str(&self.original[cursor..edit_start]);
            out.push_str(&edit.content);
            cursor = edit.end;
        }
        out.push_str(&self.original[cursor..end]);
        out
    }

    /// Returns the parts of the original range `[start, end)` that no edit
    /// touches, in order.
    pub fn untouched(&self, start: usize, end: usize) -> Vec<Span> {
        let mut parts = Vec::new();
        let mut cursor = start;
        if let Some((_, prev)) = self.edits.range(..start).next_back() {
            cursor = cursor.max(prev.end);
        }
        for (&edit_start, edit) in self.edits.range(start..end) {
            if edit_start > cursor {
                parts.push(Span::new(cursor, edit_start));
            }
            cursor = cursor.max(edit.end);
        }
        if cursor < end {
            parts.push(Span::new(cursor, end));
        }
        parts
    }

    /// Renders the final text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.original.len());
        let mut cursor = 0;
        for (&start, edit) in &self.edits {
            out.push_str(&self.original[cursor..start]);
            out.push_str(&edit.content);
            cursor = edit.end;
        }
        out.push_str(&self.original[cursor..]);
        out
    }

    /// Renders the final text together with its position table.
    ///
    /// With `hires` every character gets its own mapping; otherwise only the
    /// start of each unchanged run, each replacement and each generated line.
    /// Replacement text maps to the start of the range it replaced. Both
    /// offsets grow monotonically through the returned list.
    pub fn render_with_map(&self, hires: bool) -> (String, Vec<Mapping>) {
        let mut code = String::with_capacity(self.original.len());
        let mut mappings = Vec::new();
        let mut cursor = 0;
        for (&start, edit) in &self.edits {
            self.push_unchanged(&mut code, &mut mappings, cursor, start, hires);
            if let Some(anchor) = self.anchor(start) {
                push_mapped(&mut code, &mut mappings, &edit.content, hires, |_| anchor);
            } else {
                code.push_str(&edit.content);
            }
            cursor = edit.end;
        }
        self.push_unchanged(&mut code, &mut mappings, cursor, self.original.len(), hires);
        (code, mappings)
    }

    fn push_unchanged(
        &self,
        code: &mut String,
        mappings: &mut Vec<Mapping>,
        start: usize,
        end: usize,
        hires: bool,
    ) {
        push_mapped(code, mappings, &self.original[start..end], hires, |i| {
            start + i
        });
    }

    // Original offset that replacement text at `start` maps to. An insertion at
    // the very end maps to the last character.
    fn anchor(&self, start: usize) -> Option<usize> {
        if start < self.original.len() {
            Some(start)
        } else {
            self.original.char_indices().next_back().map(|(i, _)| i)
        }
    }
}

fn push_mapped(
    code: &mut String,
    mappings: &mut Vec<Mapping>,
    text: &str,
    hires: bool,
    original_at: impl Fn(usize) -> usize,
) {
    let base = code.len();
    let mut line_start = true;
    for (i, c) in text.char_indices() {
        if hires || i == 0 || line_start {
            mappings.push(Mapping {
                generated: base + i,
                original: original_at(i),
            });
        }
        line_start = c == '\n';
    }
    code.push_str(text);
}
