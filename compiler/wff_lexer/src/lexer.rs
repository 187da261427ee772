//! On-demand tokenizer.
//!
//! [`Lexer::next_token`] skips whitespace, then dispatches on the first
//! byte of the next token:
//!
//! - `(` / `)`: parentheses
//! - `\`: a connective command, looked up in [`Connective::from_command`]
//! - digit: a proposition, `[0-9][0-9a-z]*`
//! - letter: a word, which must be `true` or `false`
//! - anything else: [`LexError::InvalidCharacter`]

use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::cursor::Cursor;
use crate::lex_error::LexError;
use crate::token::{Connective, Span, Token, TokenKind};

/// The lexical rule currently being applied.
///
/// Purely observational: the mode never influences which token is
/// produced. It is [`LexMode::Initial`] between calls to
/// [`Lexer::next_token`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexMode {
    #[default]
    Initial,
    /// Leading digit run of a proposition.
    ReadingNumber,
    /// Digit-or-lowercase tail of a proposition.
    ReadingProposition,
    /// Letters after a `\`.
    ReadingCommand,
    /// Letters of a bare word.
    ReadingWord,
}

impl LexMode {
    pub const fn name(self) -> &'static str {
        match self {
            LexMode::Initial => "INITIAL",
            LexMode::ReadingNumber => "READING_NUMBER",
            LexMode::ReadingProposition => "READING_PROPOSITION",
            LexMode::ReadingCommand => "READING_COMMAND",
            LexMode::ReadingWord => "READING_WORD",
        }
    }
}

impl fmt::Display for LexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-use tokenizer bound to one expression.
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    mode: LexMode,
    /// Set once iteration has yielded `Eof` or an error.
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            mode: LexMode::Initial,
            done: false,
        }
    }

    /// The active lexical mode, for diagnostic tracing.
    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Produce the next token.
    ///
    /// Returns a [`TokenKind::Eof`] token once the input is exhausted, and
    /// keeps returning it on later calls. A lexical error consumes the
    /// offending fragment, so a caller that keeps pulling resumes after it.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        self.cursor.eat_whitespace();
        self.enter(LexMode::Initial);

        let start = self.cursor.pos();
        let result = match self.cursor.current() {
            None => Ok(Token::eof(start)),
            Some(b'(') => Ok(self.punct(start, TokenKind::OpenParen)),
            Some(b')') => Ok(self.punct(start, TokenKind::CloseParen)),
            Some(b'\\') => self.command(start),
            Some(b) if b.is_ascii_digit() => Ok(self.proposition(start)),
            Some(b) if b.is_ascii_alphabetic() => self.word(start),
            Some(_) => Err(self.invalid_character(start)),
        };

        self.enter(LexMode::Initial);
        match &result {
            Ok(token) => trace!(kind = ?token.kind, span = %token.span, "token"),
            Err(error) => trace!(%error, span = %error.span(), "lex error"),
        }
        result
    }

    fn enter(&mut self, mode: LexMode) {
        if self.mode != mode {
            trace!(from = %self.mode, to = %mode, pos = self.cursor.pos(), "lex mode");
            self.mode = mode;
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.cursor.pos())
    }

    fn punct(&mut self, start: usize, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        Token::new(kind, None, self.span_from(start))
    }

    fn command(&mut self, start: usize) -> Result<Token<'src>, LexError> {
        self.enter(LexMode::ReadingCommand);
        self.cursor.advance(); // '\'
        self.cursor.eat_while(|b| b.is_ascii_alphabetic());

        let span = self.span_from(start);
        let spelling = self.cursor.slice(span.start, span.end);
        match Connective::from_command(spelling) {
            Some(connective) => Ok(Token::new(connective.token_kind(), Some(spelling), span)),
            None => Err(LexError::InvalidCommand {
                spelling: spelling.to_owned(),
                span,
            }),
        }
    }

    fn proposition(&mut self, start: usize) -> Token<'src> {
        self.enter(LexMode::ReadingNumber);
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.enter(LexMode::ReadingProposition);
        self.cursor
            .eat_while(|b| b.is_ascii_digit() || b.is_ascii_lowercase());

        let span = self.span_from(start);
        Token::new(
            TokenKind::Proposition,
            Some(self.cursor.slice(span.start, span.end)),
            span,
        )
    }

    fn word(&mut self, start: usize) -> Result<Token<'src>, LexError> {
        self.enter(LexMode::ReadingWord);
        self.cursor.eat_while(|b| b.is_ascii_alphabetic());

        let span = self.span_from(start);
        let word = self.cursor.slice(span.start, span.end);
        if matches!(word, "true" | "false") {
            Ok(Token::new(TokenKind::Constant, Some(word), span))
        } else {
            Err(LexError::InvalidWord {
                word: word.to_owned(),
                span,
            })
        }
    }

    fn invalid_character(&mut self, start: usize) -> LexError {
        let ch = self
            .cursor
            .current_char()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.cursor.advance_char();
        LexError::InvalidCharacter {
            ch,
            span: self.span_from(start),
        }
    }
}

/// Yields tokens up to, not including, `Eof`. Stops after the first error.
impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}
