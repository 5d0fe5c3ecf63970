// src/output/summary.rs

use crate::core_types::RunSummary;
use std::io::{self, Write};

/// Writes one line per failed input, then a count line, to `writer`.
pub fn write_summary(writer: &mut dyn Write, summary: &RunSummary) -> io::Result<()> {
    for failure in &summary.failures {
        writeln!(writer, "jscleanup: {}: {}", failure.display_name, failure.error)?;
    }
    if summary.total() > 1 || summary.has_failures() {
        writeln!(
            writer,
            "jscleanup: {} file(s): {} changed, {} unchanged, {} failed",
            summary.total(),
            summary.changed,
            summary.unchanged,
            summary.failures.len()
        )?;
    }
    Ok(())
}
