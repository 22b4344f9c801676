//! Storage infrastructure: configuration file.
//!
//! The `config` sub-module reads the TOML configuration file from the
//! platform-appropriate directory (or an explicit path) and falls back to
//! defaults when the file does not exist.  The CLI never writes it.

pub mod config;
