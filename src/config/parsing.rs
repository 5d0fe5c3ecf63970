// src/config/parsing.rs

use super::{presets, CommentPolicy, CommentsOption};
use crate::errors::ConfigError;
use regex::{Regex, RegexBuilder};

/// Normalizes the `comments` option into a [`CommentPolicy`].
///
/// `None` selects the `some` preset. `true` keeps every comment and `false`
/// keeps none. A string is read as a one-element list.
///
/// List entries are read in order. `"all"` and `"none"` end the list and
/// select keep-all or keep-none, so later entries are not looked at. Every
/// other entry must be a preset name or a `/pattern/flags` literal. An empty
/// list blanks every comment.
pub fn parse_comment_filters(option: Option<&CommentsOption>) -> Result<CommentPolicy, ConfigError> {
    match option {
        None => Ok(CommentPolicy::default()),
        Some(CommentsOption::Flag(true)) => Ok(CommentPolicy::KeepAll),
        Some(CommentsOption::Flag(false)) => Ok(CommentPolicy::KeepNone),
        Some(CommentsOption::Filter(filter)) => parse_filters(std::slice::from_ref(filter)),
        Some(CommentsOption::Filters(filters)) => parse_filters(filters),
    }
}

fn parse_filters(filters: &[String]) -> Result<CommentPolicy, ConfigError> {
    let mut patterns = Vec::with_capacity(filters.len());
    for filter in filters {
        match filter.as_str() {
            "all" => return Ok(CommentPolicy::KeepAll),
            "none" => return Ok(CommentPolicy::KeepNone),
            other => patterns.push(compile_filter(other)?),
        }
    }
    Ok(CommentPolicy::Patterns(patterns))
}

fn compile_filter(filter: &str) -> Result<Regex, ConfigError> {
    if let Some(re) = presets::lookup(filter) {
        return Ok(re);
    }
    parse_regex_literal(filter)?
        .ok_or_else(|| ConfigError::UnknownCommentFilter(filter.to_string()))
}

/// Compiles a `/pattern/flags` literal.
///
/// Returns `Ok(None)` when `literal` does not have that shape. Flags `i`, `m`,
/// `s` and `x` map to the matching regex options; `g`, `u` and `y` are
/// accepted and have no effect on a match test.
pub fn parse_regex_literal(literal: &str) -> Result<Option<Regex>, ConfigError> {
    let Some(body) = literal.strip_prefix('/') else {
        return Ok(None);
    };
    let Some(close) = body.rfind('/') else {
        return Ok(None);
    };
    let (pattern, flags) = (&body[..close], &body[close + 1..]);
    if pattern.is_empty() || !flags.chars().all(|c| "gimsuyx".contains(c)) {
        return Ok(None);
    }

    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            _ => &mut builder,
        };
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| ConfigError::InvalidPattern {
            pattern: literal.to_string(),
            reason: e.to_string(),
        })
}
