//! Ducky script front end.
//!
//! A script is processed one line at a time; there are no multi-line
//! constructs.  [`split_lines`] breaks the text apart, [`classify_line`]
//! turns each line into a [`ScriptLine`] and the translator handles each
//! variant separately.

pub mod line;

pub use line::{classify_line, parse_millis, split_lines, Millis, ScriptLine, COMMENT_MARKER};
