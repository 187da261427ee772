//! Diagnostic token trace.
//!
//! Reports the lexer's mode alongside each token it produces. Not part of
//! the validation contract; used by `wff lex` and for debugging.

use std::fmt;
use std::iter::FusedIterator;

use crate::lex_error::LexError;
use crate::lexer::{LexMode, Lexer};
use crate::token::{Token, TokenKind};

/// One pull from the lexer: the mode observed before the pull, and its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep<'src> {
    pub mode: LexMode,
    pub token: Result<Token<'src>, LexError>,
}

impl fmt::Display for TraceStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Ok(token) => write!(f, "mode: {}, token: {token}", self.mode),
            Err(error) => write!(f, "mode: {}, error: {error}", self.mode),
        }
    }
}

/// Iterator returned by [`lex_trace`].
pub struct LexTrace<'src> {
    lexer: Lexer<'src>,
    finished: bool,
}

impl<'src> Iterator for LexTrace<'src> {
    type Item = TraceStep<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let mode = self.lexer.mode();
        let token = self.lexer.next_token();
        self.finished = !matches!(token, Ok(ref t) if t.kind != TokenKind::Eof);
        Some(TraceStep { mode, token })
    }
}

impl FusedIterator for LexTrace<'_> {}

/// Trace `source` token by token.
///
/// The final step is either the `Eof` token or the first lexical error.
pub fn lex_trace(source: &str) -> LexTrace<'_> {
    LexTrace {
        lexer: Lexer::new(source),
        finished: false,
    }
}

#[cfg(test)]
mod tests;
