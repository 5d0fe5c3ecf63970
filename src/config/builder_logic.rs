// src/config/builder_logic.rs

use super::ConfigBuilder;
use crate::config::OutputDestination;
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    let in_place = builder.in_place.unwrap_or(false);
    if builder.output_file.is_some() && in_place {
        return Err(ConfigError::Conflict {
            option1: "--output".to_string(),
            option2: "--in-place".to_string(),
        }
        .into());
    }
    if builder.output_file.is_some() && builder.inputs.len() > 1 {
        return Err(ConfigError::Conflict {
            option1: "--output".to_string(),
            option2: "multiple input files".to_string(),
        }
        .into());
    }
    if in_place && builder.inputs.is_empty() {
        return Err(ConfigError::Conflict {
            option1: "--in-place".to_string(),
            option2: "standard input".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Determines the final output destination.
pub(super) fn determine_output_destination(
    output_file: Option<PathBuf>,
    in_place: Option<bool>,
) -> OutputDestination {
    if let Some(path) = output_file {
        OutputDestination::File(path)
    } else if in_place.unwrap_or(false) {
        OutputDestination::InPlace
    } else {
        OutputDestination::Stdout
    }
}
