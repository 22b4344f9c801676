//! Reading ducky scripts and saving generated sketches.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Path argument meaning "standard input".
pub const STDIN_PATH: &str = "-";

/// Error type for script and sketch file operations.
#[derive(Debug, Error)]
pub enum SketchFileError {
    /// The script file could not be read.
    #[error("failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("failed to read script from standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// The sketch file could not be written.
    #[error("failed to save sketch to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File type of the saved sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SketchFormat {
    /// Arduino IDE sketch.
    #[default]
    Ino,
    /// Plain text.
    Txt,
}

impl SketchFormat {
    pub fn extension(self) -> &'static str {
        match self {
            SketchFormat::Ino => "ino",
            SketchFormat::Txt => "txt",
        }
    }
}

/// Reads the script from `input`, or from standard input when `input` is
/// `None` or `-`.
///
/// # Errors
///
/// Returns [`SketchFileError::Read`] or [`SketchFileError::Stdin`] on I/O
/// failure, including input that is not valid UTF-8.
pub fn read_script(input: Option<&Path>) -> Result<String, SketchFileError> {
    match input {
        Some(path) if path != Path::new(STDIN_PATH) => {
            std::fs::read_to_string(path).map_err(|source| SketchFileError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .map_err(SketchFileError::Stdin)?;
            Ok(script)
        }
    }
}

/// Appends the format's extension when `path` has none.
pub fn resolve_output_path(path: &Path, format: SketchFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

/// Writes `sketch` to `path` (extension resolved per [`resolve_output_path`])
/// and returns the path actually written.
///
/// Surrounding blank lines are removed and a single final newline is added.
///
/// # Errors
///
/// Returns [`SketchFileError::Write`] if the file cannot be written.
pub fn save_sketch(
    path: &Path,
    sketch: &str,
    format: SketchFormat,
) -> Result<PathBuf, SketchFileError> {
    let path = resolve_output_path(path, format);
    let mut contents = sketch.trim().to_string();
    contents.push('\n');

    debug!("writing {} bytes to {}", contents.len(), path.display());
    std::fs::write(&path, contents).map_err(|source| SketchFileError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
