//! Debug commands: `lex` and `parse` for inspecting a single expression.

use wff_lexer::lex_trace;

use crate::batch::{INVALID, VALID};

/// Print the lexer trace for `expression`: one `mode, token` line per pull.
pub fn lex_expression(expression: &str) {
    println!("Tokens for {expression:?}:");
    for step in lex_trace(expression) {
        println!("  {step}");
    }
}

/// Print the verdict for `expression`, with the reason when it is rejected.
pub fn parse_expression(expression: &str) {
    match wff_parse::check(expression) {
        Ok(()) => println!("{VALID}"),
        Err(error) => {
            let phase = if error.is_lexical() {
                "lexical error"
            } else {
                "syntax error"
            };
            println!("{INVALID}");
            println!("  {phase}: {error}");
        }
    }
}
