//! Convert-script use case.
//!
//! Takes script text and the effective settings, runs the translator and
//! either hands the sketch back to the caller (for standard output) or saves
//! it to a file.

use std::path::{Path, PathBuf};

use sparky_core::translator::options::DEFAULT_SKETCH_NAME;
use sparky_core::{translate, TranslateError, TranslateOptions};
use thiserror::Error;
use tracing::info;

use crate::infrastructure::sketch_file::{save_sketch, SketchFileError, SketchFormat};

/// Errors produced by [`ConvertScriptUseCase`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The script was rejected under the strict fallback policy.
    #[error("translation failed: {0}")]
    Translate(#[from] TranslateError),

    /// The sketch could not be saved.
    #[error(transparent)]
    Save(#[from] SketchFileError),
}

/// Runs translations with one fixed set of options.
#[derive(Debug, Clone)]
pub struct ConvertScriptUseCase {
    options: TranslateOptions,
}

impl ConvertScriptUseCase {
    /// Creates the use case.  A blank sketch name is replaced by the default.
    pub fn new(mut options: TranslateOptions) -> Self {
        let trimmed = options.sketch_name.trim();
        options.sketch_name = if trimmed.is_empty() {
            DEFAULT_SKETCH_NAME.to_string()
        } else {
            trimmed.to_string()
        };
        Self { options }
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Translates `script` and returns the sketch text.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Translate`] under the strict fallback policy.
    pub fn convert(&self, script: &str) -> Result<String, ConvertError> {
        info!(
            "converting sketch '{}' (layout {}, {:?} fallback)",
            self.options.sketch_name, self.options.layout, self.options.fallback
        );
        Ok(translate(script, &self.options)?)
    }

    /// Translates `script` and saves the sketch, returning the path written.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Translate`] under the strict fallback policy and
    /// [`ConvertError::Save`] if the file cannot be written.  Nothing is
    /// written when translation fails.
    pub fn convert_to_file(
        &self,
        script: &str,
        output: &Path,
        format: SketchFormat,
    ) -> Result<PathBuf, ConvertError> {
        let sketch = self.convert(script)?;
        let written = save_sketch(output, &sketch, format)?;
        info!("sketch saved as {}", written.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparky_core::FallbackPolicy;

    #[test]
    fn test_blank_sketch_name_falls_back_to_default() {
        // Arrange
        let options = TranslateOptions {
            sketch_name: "   ".to_string(),
            ..TranslateOptions::default()
        };

        // Act
        let use_case = ConvertScriptUseCase::new(options);

        // Assert
        assert_eq!(use_case.options().sketch_name, "sparky_sketch");
    }

    #[test]
    fn test_sketch_name_is_trimmed() {
        let options = TranslateOptions {
            sketch_name: " payload ".to_string(),
            ..TranslateOptions::default()
        };
        assert_eq!(ConvertScriptUseCase::new(options).options().sketch_name, "payload");
    }

    #[test]
    fn test_convert_returns_sketch_text() {
        let use_case = ConvertScriptUseCase::new(TranslateOptions::default());
        let sketch = use_case.convert("GUI r").unwrap();
        assert!(sketch.contains("DigiKeyboard.sendKeyStroke(21, 8); // GUI r"));
    }

    #[test]
    fn test_strict_failure_is_translate_error() {
        // Arrange
        let use_case = ConvertScriptUseCase::new(TranslateOptions {
            fallback: FallbackPolicy::Strict,
            ..TranslateOptions::default()
        });

        // Act
        let result = use_case.convert("STRING ok\nBOGUS");

        // Assert
        match result {
            Err(ConvertError::Translate(err)) => assert_eq!(err.line(), 2),
            other => panic!("expected translate error, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_failure_writes_no_file() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("sparky_uc_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let target = dir.join("never");
        let use_case = ConvertScriptUseCase::new(TranslateOptions {
            fallback: FallbackPolicy::Strict,
            ..TranslateOptions::default()
        });

        // Act
        let result = use_case.convert_to_file("NOPE", &target, SketchFormat::Ino);

        // Assert
        assert!(result.is_err());
        assert!(!dir.join("never.ino").exists());

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }
}
