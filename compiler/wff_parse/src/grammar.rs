//! Formula productions.

use tracing::trace;
use wff_lexer::TokenKind;
use wff_stack::ensure_sufficient_stack;

use crate::{Expected, ParseError, Parser};

impl Parser<'_> {
    /// Recognize one formula starting at the lookahead.
    ///
    /// An atom is consumed whole; `(` commits to a compound formula.
    pub fn formula(&mut self) -> Result<(), ParseError> {
        ensure_sufficient_stack(|| match self.current_kind() {
            kind if kind.is_atom() => {
                self.advance()?;
                Ok(())
            }
            TokenKind::OpenParen => {
                self.advance()?;
                self.compound()
            }
            _ => Err(self.unexpected(Expected::Formula)),
        })
    }

    /// `OPERATOR Formula{arity} ')'`, after the opening `(`.
    fn compound(&mut self) -> Result<(), ParseError> {
        let Some(connective) = self.current().connective() else {
            return Err(self.unexpected(Expected::Connective));
        };
        self.advance()?;
        trace!(operator = %connective, arity = connective.arity(), "compound");

        for _ in 0..connective.arity() {
            self.formula()?;
        }
        self.consume(TokenKind::CloseParen)?;
        Ok(())
    }
}
