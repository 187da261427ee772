//! Recursive descent recognizer for propositional formulas.
//!
//! Decides whether a token stream from [`wff_lexer`] spells a formula of
//!
//! ```text
//! Formula ::= CONSTANT
//!           | PROPOSITION
//!           | '(' UNARY_OP Formula ')'
//!           | '(' BINARY_OP Formula Formula ')'
//! ```
//!
//! followed by end of input. The grammar is LL(1): one lookahead token,
//! no backtracking. Nothing is built; the only output is a verdict.
//!
//! [`check`] keeps the reason for a rejection, [`validate`] collapses it
//! to a `bool`.

mod error;
mod grammar;

pub use error::{Expected, ParseError};

use tracing::{debug, trace};
use wff_lexer::{Lexer, Token, TokenKind};

/// Parser state: the lexer and the current lookahead token.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
}

impl<'src> Parser<'src> {
    /// Create a parser over `source` and pull the first lookahead token.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    /// The lookahead token.
    #[inline]
    pub fn current(&self) -> &Token<'src> {
        &self.current
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Replace the lookahead with the next token, returning the old one.
    fn advance(&mut self) -> Result<Token<'src>, ParseError> {
        let next = self.lexer.next_token()?;
        trace!(kind = ?self.current.kind, span = %self.current.span, "advance");
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the lookahead if it is `kind`, otherwise fail.
    fn consume(&mut self, kind: TokenKind) -> Result<Token<'src>, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(Expected::Token(kind)))
        }
    }

    fn unexpected(&self, expected: Expected) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current.kind,
            span: self.current.span,
        }
    }

    /// Recognize one formula and require end of input after it.
    pub fn parse(mut self) -> Result<(), ParseError> {
        self.formula()?;
        if self.check(TokenKind::Eof) {
            Ok(())
        } else {
            Err(ParseError::TrailingInput {
                found: self.current.kind,
                span: self.current.span,
            })
        }
    }
}

/// Check `source`, keeping the reason for a rejection.
pub fn check(source: &str) -> Result<(), ParseError> {
    Parser::new(source)?.parse()
}

/// Whether `source` is a well-formed formula.
///
/// Lexical and syntax errors both yield `false`. Total over all inputs.
pub fn validate(source: &str) -> bool {
    match check(source) {
        Ok(()) => {
            debug!(source, "valid");
            true
        }
        Err(error) => {
            debug!(source, %error, "invalid");
            false
        }
    }
}
