//! Per-call translator configuration.
//!
//! `TranslateOptions` derives `Serialize`/`Deserialize` so that the CLI can
//! embed it directly as the `[translator]` table of its TOML config file.
//! Fields annotated with `#[serde(default = "...")]` keep their default when
//! absent from the file.

use serde::{Deserialize, Serialize};

/// What to do when the script names a character, key or modifier that has no
/// mapping, or gives a delay that is not a plain non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Substitute a fixed value and log a warning:
    ///
    /// - unknown character -> Space
    /// - unknown key token -> `r`
    /// - unknown modifier token -> ignored
    /// - malformed delay -> 0 ms
    #[default]
    Lenient,
    /// Abort translation with a [`crate::TranslateError`].
    Strict,
}

/// Configuration for one call to [`crate::translate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateOptions {
    /// Keyboard layout tag written into the sketch header.  Free-form; the
    /// keycode table is always US.
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Sketch name.  Accepted for the shell's benefit, never rendered.
    #[serde(default = "default_sketch_name")]
    pub sketch_name: String,
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

pub const DEFAULT_LAYOUT: &str = "US";
pub const DEFAULT_SKETCH_NAME: &str = "sparky_sketch";

fn default_layout() -> String {
    DEFAULT_LAYOUT.to_string()
}
fn default_sketch_name() -> String {
    DEFAULT_SKETCH_NAME.to_string()
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            sketch_name: default_sketch_name(),
            fallback: FallbackPolicy::default(),
        }
    }
}

impl TranslateOptions {
    /// Returns `true` when unmapped input must abort translation.
    pub fn is_strict(&self) -> bool {
        self.fallback == FallbackPolicy::Strict
    }
}
