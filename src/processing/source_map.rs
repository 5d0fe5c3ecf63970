//! Source map generation.
//!
//! The text buffer reports byte offsets; source maps want zero-based lines and
//! UTF-16 columns. Both offset streams only move forward, so each side is
//! converted with a cursor that never rescans text it already passed.

use super::buffer::Mapping;
use crate::errors::Result;
use sourcemap::{SourceMap, SourceMapBuilder};

/// Converts increasing byte offsets into `(line, utf16_column)` pairs.
struct LineCursor<'a> {
    text: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 0,
            col: 0,
        }
    }

    /// Moves to `offset`. An offset inside a multi-byte character resolves to
    /// that character.
    fn seek(&mut self, offset: usize) -> (u32, u32) {
        debug_assert!(offset >= self.pos, "cursor moved backwards");
        let offset = offset.min(self.text.len());
        for c in self.text[self.pos..].chars() {
            if self.pos + c.len_utf8() > offset {
                break;
            }
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += c.len_utf16() as u32;
            }
        }
        (self.line, self.col)
    }
}

/// Builds a v3 source map for `generated` from the buffer's position table.
///
/// `original` is the text as read, before any comment was blanked, and is
/// embedded as the content of the single source `name`.
pub fn build_source_map(
    name: &str,
    original: &str,
    generated: &str,
    mappings: &[Mapping],
) -> SourceMap {
    let mut builder = SourceMapBuilder::new(None);
    builder.add_source(name);
    builder.set_source_contents(0, Some(original));

    let mut dst = LineCursor::new(generated);
    let mut src = LineCursor::new(original);
    for mapping in mappings {
        let (dst_line, dst_col) = dst.seek(mapping.generated);
        let (src_line, src_col) = src.seek(mapping.original);
        builder.add(dst_line, dst_col, src_line, src_col, Some(name), None, false);
    }
    builder.into_sourcemap()
}

/// Serializes a source map to JSON.
pub fn to_json(map: &SourceMap) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    map.to_writer(&mut buf)?;
    // The writer only emits JSON, which is UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
