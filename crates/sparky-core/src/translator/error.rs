use thiserror::Error;

/// Errors raised while translating under [`crate::FallbackPolicy::Strict`].
///
/// Line numbers are 1-based positions in the input script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A `STRING` payload or key token contains a character with no keystroke.
    #[error("line {line}: no keystroke types {ch:?}")]
    UnknownCharacter { line: usize, ch: char },

    /// The last token of a key combination is not a key name.
    #[error("line {line}: unknown key {token:?}")]
    UnknownKey { line: usize, token: String },

    /// A token before the key of a combination is not a modifier name.
    #[error("line {line}: unknown modifier {token:?}")]
    UnknownModifier { line: usize, token: String },

    /// A `DELAY`/`DEFAULTDELAY` argument is missing or not a plain integer.
    #[error("line {line}: invalid delay argument {argument:?}")]
    InvalidDelay { line: usize, argument: String },
}

impl TranslateError {
    /// The script line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            TranslateError::UnknownCharacter { line, .. }
            | TranslateError::UnknownKey { line, .. }
            | TranslateError::UnknownModifier { line, .. }
            | TranslateError::InvalidDelay { line, .. } => *line,
        }
    }
}
