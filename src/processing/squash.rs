//! Blank line squashing.
//!
//! The text is split into content spans (tokens, plus preserved block comments
//! when they are not compacted) and the gaps between them. Only gaps are
//! rewritten. Inside a gap every whitespace run that holds a line break is cut
//! at its last break: the part up to and including that break becomes a row of
//! target line endings, capped by the empty-line budget, and the indentation
//! after it is left alone. Horizontal whitespace at the very end of the text is
//! deleted. Comments due for removal count as whitespace, so a run may swallow
//! them whole.
//!
//! Budgets count line endings. A run between two content lines keeps at most
//! `max + 1` of them (the break that ends the previous line plus `max` empty
//! lines). A run at the start of the text has no line to end, so it keeps at
//! most `max`. A negative `max` keeps every break.

use super::buffer::TextBuffer;
use crate::config::LineEnding;
use crate::core_types::Span;
use crate::tokenizer::{count_line_breaks, is_space};

/// Squashes the blank runs between `content` spans.
///
/// `content` and `removed` must be sorted and non-overlapping. Text inside a
/// `removed` span counts as whitespace. Returns `true` if any edit was
/// recorded.
pub fn squash_lines(
    buffer: &mut TextBuffer<'_>,
    content: &[Span],
    removed: &[Span],
    eol: LineEnding,
    max_empty_lines: i32,
) -> bool {
    let lead_budget = usize::try_from(max_empty_lines).unwrap_or(usize::MAX);
    let interior_budget = lead_budget.saturating_add(1);
    let eol = eol.as_str();
    let len = buffer.len();

    let mut changed = false;
    for gap in gaps(content, len) {
        for run in blank_runs(buffer.original(), gap, removed) {
            changed |= squash_run(buffer, run, eol, lead_budget, interior_budget);
        }
    }
    changed
}

/// Rewrites the line breaks inside preserved comments to `eol`.
///
/// Used when preserved comments are content spans, so their inside is
/// otherwise left untouched.
pub fn normalize_line_endings(
    buffer: &mut TextBuffer<'_>,
    spans: &[Span],
    eol: LineEnding,
) -> bool {
    let eol = eol.as_str();
    let mut changed = false;
    for span in spans {
        let text = buffer.original();
        let bytes = text.as_bytes();
        let mut breaks = Vec::new();
        let mut i = span.start;
        while i < span.end {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') && i + 1 < span.end => {
                    breaks.push(Span::new(i, i + 2));
                    i += 2;
                }
                b'\r' | b'\n' => {
                    breaks.push(Span::new(i, i + 1));
                    i += 1;
                }
                _ => i += 1,
            }
        }
        for brk in breaks {
            changed |= replace_block(buffer, brk.start, brk.end, eol);
        }
    }
    changed
}

/// A maximal whitespace run inside a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlankRun {
    start: usize,
    end: usize,
    /// Offset just past the last line break of the run.
    last_break_end: Option<usize>,
}

fn gaps(content: &[Span], len: usize) -> impl Iterator<Item = Span> + '_ {
    let starts = std::iter::once(0).chain(content.iter().map(|s| s.end));
    let ends = content.iter().map(|s| s.start).chain(std::iter::once(len));
    starts
        .zip(ends)
        .filter(|(start, end)| start < end)
        .map(|(start, end)| Span::new(start, end))
}

fn blank_runs(text: &str, gap: Span, removed: &[Span]) -> Vec<BlankRun> {
    let first = removed.partition_point(|span| span.end <= gap.start);
    let mut removed = removed[first..].iter().peekable();
    let mut runs = Vec::new();
    let mut current: Option<BlankRun> = None;
    for (i, c) in text[gap.start..gap.end].char_indices() {
        let at = gap.start + i;
        while removed.next_if(|span| span.end <= at).is_some() {}
        let in_removed = removed.peek().is_some_and(|span| span.start <= at);
        if in_removed || is_space(c) {
            let run = current.get_or_insert(BlankRun {
                start: at,
                end: at,
                last_break_end: None,
            });
            run.end = at + c.len_utf8();
            if c == '\n' || c == '\r' {
                run.last_break_end = Some(run.end);
            }
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }
    runs.extend(current);
    runs
}

fn squash_run(
    buffer: &mut TextBuffer<'_>,
    run: BlankRun,
    eol: &str,
    lead_budget: usize,
    interior_budget: usize,
) -> bool {
    let len = buffer.len();
    let at_end = run.end == len;
    let Some(break_end) = run.last_break_end else {
        // Spaces after the last line of the text.
        return at_end && replace_block(buffer, run.start, run.end, "");
    };

    // The leading run is only capped as such when content follows it.
    let budget = if run.start == 0 && !at_end {
        lead_budget
    } else {
        interior_budget
    };
    let lines = count_line_breaks(&buffer.original()[run.start..break_end]);
    let replacement = eol.repeat(lines.min(budget));
    let mut changed = replace_block(buffer, run.start, break_end, &replacement);
    if at_end && break_end < run.end {
        changed |= replace_block(buffer, break_end, run.end, "");
    }
    changed
}

/// Overwrites `[start, end)` unless it already reads `replacement`.
fn replace_block(buffer: &mut TextBuffer<'_>, start: usize, end: usize, replacement: &str) -> bool {
    if &buffer.original()[start..end] == replacement {
        return false;
    }
    buffer.overwrite(start, end, replacement);
    true
}
