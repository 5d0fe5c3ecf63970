//! The `jscleanup` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types and functions, so a
//! single glob import is enough to configure and run a transform.
//!
//! # Example
//!
//! ```
//! use jscleanup::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let policy = ConfigBuilder::new()
//!     .comments(["license", "jsdoc"])
//!     .max_empty_lines(1)
//!     .line_endings(LineEnding::Unix)
//!     .build_policy()?;
//! let cleaned = cleanup("// x\n\n\n\na();\n", "a.js", &policy)?;
//! assert_eq!(cleaned.map(|c| c.code).as_deref(), Some("\na();\n"));
//!
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{
    CommentPolicy, CommentsOption, Config, ConfigBuilder, LineEnding, Options, OutputDestination,
    Policy,
};
pub use crate::core_types::{Cleaned, FileInfo, RunSummary, Span};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::processing::{filter_comments, squash_lines, Mapping, TextBuffer};
pub use crate::tokenizer::{EcmaVersion, JsLexer, SourceType, Tokenizer};
pub use crate::{cleanup, cleanup_with, run};
