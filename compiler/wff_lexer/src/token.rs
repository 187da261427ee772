//! Token types produced by the lexer.

use std::fmt;

/// Half-open byte range `start..end` within the expression text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    pub const fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Token classification. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `\neg`
    UnaryOperator,
    /// `\wedge`, `\vee`, `\rightarrow`, `\leftrightarrow`
    BinaryOperator,
    /// Digit-led identifier such as `1`, `2p`, `10q2`.
    Proposition,
    /// `true` or `false`
    Constant,
    OpenParen,
    CloseParen,
    /// End of input. Returned for every pull once the source is exhausted.
    Eof,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::UnaryOperator => "unary operator",
            TokenKind::BinaryOperator => "binary operator",
            TokenKind::Proposition => "proposition",
            TokenKind::Constant => "constant",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether tokens of this kind carry their spelling as a lexeme.
    pub const fn has_lexeme(self) -> bool {
        matches!(
            self,
            TokenKind::UnaryOperator
                | TokenKind::BinaryOperator
                | TokenKind::Proposition
                | TokenKind::Constant
        )
    }

    /// Kinds that form a complete formula on their own.
    pub const fn is_atom(self) -> bool {
        matches!(self, TokenKind::Proposition | TokenKind::Constant)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexical unit.
///
/// `lexeme` borrows the token's spelling from the source for operators,
/// propositions and constants; it is `None` for parentheses and
/// [`TokenKind::Eof`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: Option<&'src str>,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub(crate) fn new(kind: TokenKind, lexeme: Option<&'src str>, span: Span) -> Self {
        debug_assert_eq!(
            kind.has_lexeme(),
            lexeme.is_some(),
            "lexeme presence must match {kind:?}"
        );
        Self { kind, lexeme, span }
    }

    pub(crate) fn eof(pos: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: None,
            span: Span::point(pos),
        }
    }

    /// The connective this token spells, for operator tokens.
    pub fn connective(&self) -> Option<Connective> {
        match self.kind {
            TokenKind::UnaryOperator | TokenKind::BinaryOperator => {
                self.lexeme.and_then(Connective::from_command)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme {
            Some(lexeme) => write!(f, "Token({:?}, {lexeme})", self.kind),
            None => write!(f, "Token({:?})", self.kind),
        }
    }
}

/// Logical connective named by a LaTeX command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Biconditional,
}

impl Connective {
    /// Resolve a command spelling, backslash included. Case-sensitive.
    pub fn from_command(spelling: &str) -> Option<Self> {
        match spelling {
            r"\neg" => Some(Connective::Negation),
            r"\wedge" => Some(Connective::Conjunction),
            r"\vee" => Some(Connective::Disjunction),
            r"\rightarrow" => Some(Connective::Implication),
            r"\leftrightarrow" => Some(Connective::Biconditional),
            _ => None,
        }
    }

    pub const fn command(self) -> &'static str {
        match self {
            Connective::Negation => r"\neg",
            Connective::Conjunction => r"\wedge",
            Connective::Disjunction => r"\vee",
            Connective::Implication => r"\rightarrow",
            Connective::Biconditional => r"\leftrightarrow",
        }
    }

    /// Number of operand formulas.
    pub const fn arity(self) -> usize {
        match self {
            Connective::Negation => 1,
            _ => 2,
        }
    }

    pub const fn token_kind(self) -> TokenKind {
        match self {
            Connective::Negation => TokenKind::UnaryOperator,
            _ => TokenKind::BinaryOperator,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

#[cfg(test)]
mod tests;
