// src/constants.rs

/// Number of spaces in the reusable pool used to blank comments.
pub const SPACE_POOL_LEN: usize = 150;

/// Name reported for source text read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Extension appended to an output path to name its source map file.
pub const SOURCE_MAP_EXTENSION: &str = "map";

/// Highest ECMAScript edition understood by the built-in scanner.
pub const LATEST_ECMA_VERSION: u16 = 2025;

/// First edition with hashbang comments.
pub const HASHBANG_ECMA_VERSION: u16 = 2023;
