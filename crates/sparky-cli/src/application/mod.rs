//! Application layer: use cases that combine the translator with the
//! file-system adapters.

pub mod convert_script;
