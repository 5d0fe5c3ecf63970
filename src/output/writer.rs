// src/output/writer.rs

//! Manages the output destination (stdout, a file, or the inputs themselves).
//!
//! Source maps never go to stdout. With a file destination the map is written
//! beside the output file; in place it is written beside each rewritten input.

use crate::config::OutputDestination;
use crate::constants::SOURCE_MAP_EXTENSION;
use crate::core_types::{Cleaned, FileInfo};
use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Creates the stream writer for a destination that has one.
///
/// Returns `None` for [`OutputDestination::InPlace`], where every input is
/// written back on its own.
///
/// # Errors
/// Returns an error if the output file cannot be created.
pub fn setup_output_writer(
    destination: &OutputDestination,
) -> Result<Option<Box<dyn Write + Send>>> {
    let writer: Box<dyn Write + Send> = match destination {
        OutputDestination::Stdout => Box::new(BufWriter::new(io::stdout())),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file))
        }
        OutputDestination::InPlace => return Ok(None),
    };
    Ok(Some(writer))
}

/// Returns the path of the source map that accompanies `path`.
pub fn map_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(SOURCE_MAP_EXTENSION);
    PathBuf::from(name)
}

/// Writes the source map of `cleaned`, if it has one, beside `output_path`.
///
/// Returns the path written.
pub fn write_map_beside(output_path: &Path, cleaned: &Cleaned) -> Result<Option<PathBuf>> {
    let Some(json) = cleaned.map_json()? else {
        return Ok(None);
    };
    let map_path = map_path_for(output_path);
    fs::write(&map_path, json).map_err(|e| io_error_with_path(e, &map_path))?;
    debug!("Wrote source map: {}", map_path.display());
    Ok(Some(map_path))
}

/// Rewrites an input file with its cleaned text and writes its map.
///
/// Unchanged inputs are left untouched.
pub fn write_in_place(file: &FileInfo) -> Result<()> {
    let (Some(path), Some(cleaned)) = (&file.path, &file.cleaned) else {
        return Ok(());
    };
    fs::write(path, &cleaned.code).map_err(|e| io_error_with_path(e, path))?;
    debug!("Rewrote {}", path.display());
    write_map_beside(path, cleaned)?;
    Ok(())
}

/// Writes the final text of `file` to a stream.
pub fn write_code(writer: &mut dyn Write, file: &FileInfo, destination: &Path) -> Result<()> {
    writer
        .write_all(file.output_code().as_bytes())
        .map_err(|e| io_error_with_path(e, destination))
}

/// Flushes a stream writer.
pub fn finalize_output(mut writer: Box<dyn Write + Send>, destination: &Path) -> Result<()> {
    writer
        .flush()
        .map_err(|e| io_error_with_path(e, destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::tempdir;

    fn changed_file(path: Option<PathBuf>) -> FileInfo {
        let map = crate::processing::source_map::build_source_map(
            "a.js",
            "a;\n\n",
            "a;\n",
            &[crate::processing::Mapping {
                generated: 0,
                original: 0,
            }],
        );
        FileInfo {
            path,
            display_name: "a.js".to_string(),
            source: "a;\n\n".to_string(),
            cleaned: Some(Cleaned {
                code: "a;\n".to_string(),
                map: Some(map),
            }),
        }
    }

    #[test]
    fn test_map_path_appends_extension() {
        assert_eq!(map_path_for(Path::new("dist/app.js")), PathBuf::from("dist/app.js.map"));
        assert_eq!(map_path_for(Path::new("noext")), PathBuf::from("noext.map"));
    }

    #[test]
    fn test_setup_output_writer_in_place_has_no_stream() -> Result<()> {
        assert!(setup_output_writer(&OutputDestination::InPlace)?.is_none());
        assert!(setup_output_writer(&OutputDestination::Stdout)?.is_some());
        Ok(())
    }

    #[test]
    fn test_setup_output_writer_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out.js");
        let mut writer = setup_output_writer(&OutputDestination::File(out.clone()))?.unwrap();
        write_code(&mut writer, &changed_file(None), &out)?;
        finalize_output(writer, &out)?;
        assert_eq!(fs::read_to_string(&out)?, "a;\n");
        Ok(())
    }

    #[test]
    fn test_setup_output_writer_bad_path() {
        let result = setup_output_writer(&OutputDestination::File(PathBuf::from(
            "definitely/missing/dir/out.js",
        )));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_write_in_place_writes_code_and_map() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.js");
        fs::write(&path, "a;\n\n")?;
        write_in_place(&changed_file(Some(path.clone())))?;
        assert_eq!(fs::read_to_string(&path)?, "a;\n");
        let map = fs::read_to_string(map_path_for(&path))?;
        assert!(map.contains("\"sources\":[\"a.js\"]"));
        Ok(())
    }

    #[test]
    fn test_write_in_place_skips_unchanged() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.js");
        fs::write(&path, "a;\n")?;
        let file = FileInfo {
            path: Some(path.clone()),
            display_name: "a.js".to_string(),
            source: "a;\n".to_string(),
            cleaned: None,
        };
        write_in_place(&file)?;
        assert!(!map_path_for(&path).exists());
        Ok(())
    }
}
