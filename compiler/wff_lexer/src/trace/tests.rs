use pretty_assertions::assert_eq;

use super::*;

fn rendered(source: &str) -> Vec<String> {
    lex_trace(source).map(|step| step.to_string()).collect()
}

#[test]
fn trace_ends_with_eof() {
    assert_eq!(
        rendered(r"(\neg 1)"),
        vec![
            "mode: INITIAL, token: Token(OpenParen)",
            r"mode: INITIAL, token: Token(UnaryOperator, \neg)",
            "mode: INITIAL, token: Token(Proposition, 1)",
            "mode: INITIAL, token: Token(CloseParen)",
            "mode: INITIAL, token: Token(Eof)",
        ]
    );
}

#[test]
fn empty_input_traces_a_single_eof() {
    let steps: Vec<_> = lex_trace("").collect();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].token.as_ref().map(|t| t.kind), Ok(TokenKind::Eof));
}

#[test]
fn trace_stops_at_first_error() {
    assert_eq!(
        rendered("true oops 1"),
        vec![
            "mode: INITIAL, token: Token(Constant, true)",
            "mode: INITIAL, error: invalid word: oops",
        ]
    );
}

#[test]
fn trace_is_fused() {
    let mut trace = lex_trace("1");
    assert_eq!(trace.by_ref().count(), 2);
    assert!(trace.next().is_none());
}
