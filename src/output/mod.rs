// src/output/mod.rs

use crate::config::OutputDestination;
use crate::core_types::FileInfo;
use crate::errors::Result;
use log::debug;
use std::path::Path;

pub mod summary;
pub mod writer; // Manages the output destination

/// Writes the results of a run to `destination`, in input order.
///
/// * Stdout: every final text, concatenated. No maps.
/// * File: the final text, and its map beside it when one was generated.
/// * In place: changed inputs are rewritten together with their maps.
pub fn write_outputs(files: &[FileInfo], destination: &OutputDestination) -> Result<()> {
    debug!("Writing {} result(s) to {:?}", files.len(), destination);

    let Some(mut stream) = writer::setup_output_writer(destination)? else {
        for file in files {
            writer::write_in_place(file)?;
        }
        return Ok(());
    };

    let target = match destination {
        OutputDestination::File(path) => path.as_path(),
        _ => Path::new("<stdout>"),
    };
    for file in files {
        writer::write_code(&mut stream, file, target)?;
    }
    writer::finalize_output(stream, target)?;

    if let OutputDestination::File(path) = destination {
        for cleaned in files.iter().filter_map(|f| f.cleaned.as_ref()) {
            writer::write_map_beside(path, cleaned)?;
        }
    }
    Ok(())
}
