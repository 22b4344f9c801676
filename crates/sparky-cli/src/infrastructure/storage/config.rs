//! TOML-based configuration for the `sparky` command.
//!
//! Reads `AppConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\Sparky\config.toml`
//! - Linux:    `~/.config/sparky/config.toml`
//! - macOS:    `~/Library/Application Support/Sparky/config.toml`
//!
//! Example:
//!
//! ```toml
//! [translator]
//! layout = "DE"
//! sketch_name = "rickroll"
//! fallback = "strict"
//!
//! [output]
//! format = "ino"
//! log_level = "warn"
//! ```
//!
//! Every field is optional; command-line flags override whatever the file
//! says.  The `[translator]` table deserializes straight into
//! [`TranslateOptions`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sparky_core::TranslateOptions;
use thiserror::Error;

use crate::infrastructure::sketch_file::SketchFormat;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub translator: TranslateOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and how the generated sketch is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Extension added to output paths that have none.
    #[serde(default)]
    pub format: SketchFormat,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: SketchFormat::default(),
            log_level: default_log_level(),
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from the default location, returning
/// `AppConfig::default()` if the file does not exist or the platform has no
/// config directory.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = match config_file_path() {
        Ok(path) => path,
        Err(ConfigError::NoPlatformConfigDir) => return Ok(AppConfig::default()),
        Err(e) => return Err(e),
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(parse_config(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Loads `AppConfig` from an explicitly named file.  Unlike [`load_config`],
/// a missing file is an error.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Parses config file contents.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Resolves the platform config base directory plus the `Sparky` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Sparky"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("sparky"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/Sparky
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Sparky")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        // Fallback for unsupported platforms.
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
