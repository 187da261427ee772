//! Lexical errors.

use thiserror::Error;

use crate::token::Span;

/// A character sequence that does not form any token.
///
/// Each variant keeps the offending fragment and where it was found.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexError {
    /// A character that cannot start any token, e.g. `#` or `¬`.
    #[error("invalid character: {ch}")]
    InvalidCharacter { ch: char, span: Span },
    /// A `\` command other than the five connectives.
    #[error("invalid LaTeX command: {spelling}")]
    InvalidCommand { spelling: String, span: Span },
    /// A run of letters other than `true` or `false`.
    #[error("invalid word: {word}")]
    InvalidWord { word: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::InvalidCharacter { span, .. }
            | LexError::InvalidCommand { span, .. }
            | LexError::InvalidWord { span, .. } => *span,
        }
    }
}
