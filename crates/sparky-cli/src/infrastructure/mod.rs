//! Infrastructure layer: everything that touches the file system.
//!
//! - `storage`     – TOML configuration file.
//! - `sketch_file` – reading the script and saving the generated sketch.

pub mod sketch_file;
pub mod storage;
