//! Recognition errors.
//!
//! A formula is rejected either because its text does not lex
//! ([`ParseError::Lex`]) or because its tokens do not match the grammar.
//! [`validate`](crate::validate) treats both the same; the distinction
//! exists for diagnostics and tests.

use std::fmt;

use thiserror::Error;
use wff_lexer::{LexError, Span, TokenKind};

/// What the recognizer wanted at the point of failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A constant, a proposition, or `(`.
    Formula,
    /// A unary or binary operator after `(`.
    Connective,
    /// One specific token kind.
    Token(TokenKind),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Formula => f.write_str("a formula"),
            Expected::Connective => f.write_str("an operator"),
            Expected::Token(kind) => f.write_str(kind.display_name()),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The lookahead did not fit the production being recognized.
    #[error("expected {expected}, found {found} at {span}")]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        span: Span,
    },
    /// A complete formula was followed by more tokens.
    #[error("unexpected {found} after complete formula at {span}")]
    TrailingInput { found: TokenKind, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(error) => error.span(),
            ParseError::UnexpectedToken { span, .. } | ParseError::TrailingInput { span, .. } => {
                *span
            }
        }
    }

    /// Whether the failure happened while lexing rather than matching the grammar.
    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::Lex(_))
    }
}
