//! Tokenizer for propositional formulas in prefix LaTeX notation.
//!
//! Turns text such as `(\wedge 1 (\neg true))` into a lazy stream of
//! classified [`Token`]s, one per [`Lexer::next_token`] call. The lexer
//! only enforces lexical rules; whether the tokens form a formula is the
//! recognizer's business.
//!
//! # Architecture
//!
//! ```text
//! &str ──► Cursor ──► Lexer::next_token() ──► Result<Token, LexError>
//!                          │
//!                          └──► LexMode (observational, see lex_trace)
//! ```
//!
//! # Token forms
//!
//! | Kind             | Spelling                                          |
//! |------------------|---------------------------------------------------|
//! | `UnaryOperator`  | `\neg`                                            |
//! | `BinaryOperator` | `\wedge` `\vee` `\rightarrow` `\leftrightarrow`   |
//! | `Constant`       | `true` `false`                                    |
//! | `Proposition`    | a digit, then any digits or lowercase letters     |
//! | `OpenParen`      | `(`                                               |
//! | `CloseParen`     | `)`                                               |
//!
//! Whitespace between tokens (see [`is_space`]) is skipped.

mod cursor;
mod lex_error;
mod lexer;
mod token;
mod trace;

pub use cursor::is_space;
pub use lex_error::LexError;
pub use lexer::{LexMode, Lexer};
pub use token::{Connective, Span, Token, TokenKind};
pub use trace::{lex_trace, LexTrace, TraceStep};
