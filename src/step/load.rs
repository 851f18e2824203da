//! Step file loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::StepSequence;

/// Errors surfaced while reading a step file. Everything past this boundary
/// is defensive-by-omission and cannot fail.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid step file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a [`StepSequence`] from a JSON file.
pub fn load_sequence(path: &Path) -> Result<StepSequence, StepError> {
    let text = fs::read_to_string(path).map_err(|source| StepError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| StepError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
