// src/config/presets.rs

//! Named comment filters.
//!
//! Each preset matches the qualified text of a comment: the body prefixed
//! with `*` for block comments or `/` for line comments.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    // Patterns are constants covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid preset pattern {}: {}", pattern, e))
}

/// Only license banners.
pub static LICENSE: Lazy<Regex> = Lazy::new(|| compile(r"@license\b"));
/// Roughly what minifiers keep by default.
pub static SOME: Lazy<Regex> = Lazy::new(|| compile(r"(?:@license|@preserve|@cc_on)\b"));
/// JSDoc blocks that carry at least one tag.
pub static JSDOC: Lazy<Regex> = Lazy::new(|| compile(r"^\*\*[^@]*@[A-Za-z]"));
pub static JSLINT: Lazy<Regex> = Lazy::new(|| compile(r"^[/*](?:jslint|global|property)\b"));
pub static JSHINT: Lazy<Regex> =
    Lazy::new(|| compile(r"^[/*]\s*(?:jshint|globals|exported)\s"));
pub static ESLINT: Lazy<Regex> =
    Lazy::new(|| compile(r"^[/*]\s*(?:eslint(?:\s|-env|-disable|-enable)|global\s)"));
pub static JSCS: Lazy<Regex> = Lazy::new(|| compile(r"^[/*]\s*jscs:[ed]"));
pub static ISTANBUL: Lazy<Regex> = Lazy::new(|| compile(r"^[/*]\s*istanbul\s"));
/// `//# sourceMappingURL=` and the older `//@ sourceURL=` forms.
pub static SRCMAPS: Lazy<Regex> = Lazy::new(|| compile(r"^.[#@]\ssource(?:Mapping)?URL="));
/// TypeScript triple-slash directives.
pub static TS3S: Lazy<Regex> =
    Lazy::new(|| compile(r"^//[ \t]*<(?:reference\s|amd-(?:module|dependency)\s)"));

/// Names accepted by [`lookup`], in documentation order.
pub const NAMES: &[&str] = &[
    "license", "some", "jsdoc", "jslint", "jshint", "eslint", "jscs", "istanbul", "srcmaps",
    "ts3s",
];

/// Returns the pattern of a named preset.
pub fn lookup(name: &str) -> Option<Regex> {
    let re = match name {
        "license" => &LICENSE,
        "some" => &SOME,
        "jsdoc" => &JSDOC,
        "jslint" => &JSLINT,
        "jshint" => &JSHINT,
        "eslint" => &ESLINT,
        "jscs" => &JSCS,
        "istanbul" => &ISTANBUL,
        "srcmaps" => &SRCMAPS,
        "ts3s" => &TS3S,
        _ => return None,
    };
    Some(Regex::clone(re))
}
