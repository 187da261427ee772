//! Property-based tests for the recognizer.
//!
//! Generates formulas from the grammar and checks that:
//! 1. Every generated formula is accepted, whatever the whitespace between tokens.
//! 2. Damaging a formula (dropping its last `)`, appending a token) rejects it.
//! 3. Arbitrary text never panics and always gets the same verdict twice.

#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use wff_parse::{check, validate, ParseError};

// -- Generation Strategies --

/// A single formula token, already spelled.
#[derive(Clone, Debug)]
enum Piece {
    Open,
    Close,
    Word(String),
}

fn atom_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("true".to_string()),
        Just("false".to_string()),
        "[0-9][0-9a-z]{0,6}",
    ]
}

fn binary_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(r"\wedge"),
        Just(r"\vee"),
        Just(r"\rightarrow"),
        Just(r"\leftrightarrow"),
    ]
}

/// Well-formed formulas as token sequences.
fn formula_strategy() -> impl Strategy<Value = Vec<Piece>> {
    let leaf = atom_strategy().prop_map(|atom| vec![Piece::Word(atom)]);
    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|operand| {
                let mut pieces = vec![Piece::Open, Piece::Word(r"\neg".to_string())];
                pieces.extend(operand);
                pieces.push(Piece::Close);
                pieces
            }),
            (binary_strategy(), inner.clone(), inner).prop_map(|(op, left, right)| {
                let mut pieces = vec![Piece::Open, Piece::Word(op.to_string())];
                pieces.extend(left);
                pieces.extend(right);
                pieces.push(Piece::Close);
                pieces
            }),
        ]
    })
}

/// Whitespace run placed between two tokens.
fn gap_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\t".to_string()),
        Just("\n".to_string()),
        Just("  \r\n ".to_string()),
        Just("\x0B\x1C".to_string()),
    ]
}

/// Render pieces, placing `gaps[i]` (when present) between piece `i - 1`
/// and piece `i`. Two words left without a gap get a single space so they
/// do not merge; parentheses may touch their neighbours.
fn render(pieces: &[Piece], gaps: &[Option<String>]) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            match gaps.get(i) {
                Some(Some(gap)) => out.push_str(gap),
                _ if matches!((&pieces[i - 1], piece), (Piece::Word(_), Piece::Word(_))) => {
                    out.push(' ');
                }
                _ => {}
            }
        }
        match piece {
            Piece::Open => out.push('('),
            Piece::Close => out.push(')'),
            Piece::Word(word) => out.push_str(word),
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_formulas_are_valid(
        pieces in formula_strategy(),
        gaps in proptest::collection::vec(proptest::option::of(gap_strategy()), 0..64),
    ) {
        let source = render(&pieces, &gaps);
        prop_assert_eq!(check(&source), Ok(()), "{}", source);
    }

    #[test]
    fn surrounding_whitespace_is_ignored(
        pieces in formula_strategy(),
        before in gap_strategy(),
        after in gap_strategy(),
    ) {
        let source = format!("{before}{}{after}", render(&pieces, &[]));
        prop_assert!(validate(&source), "{}", source);
    }

    #[test]
    fn dropping_the_last_close_paren_rejects(pieces in formula_strategy()) {
        prop_assume!(matches!(pieces.last(), Some(Piece::Close)));
        let source = render(&pieces[..pieces.len() - 1], &[]);
        prop_assert!(!validate(&source), "{}", source);
    }

    #[test]
    fn trailing_atom_rejects(pieces in formula_strategy(), extra in atom_strategy()) {
        let source = format!("{} {extra}", render(&pieces, &[]));
        let rejected = matches!(check(&source), Err(ParseError::TrailingInput { .. }));
        prop_assert!(rejected, "{}", source);
    }

    #[test]
    fn arbitrary_text_is_total_and_deterministic(source in "\\PC{0,48}") {
        prop_assert_eq!(validate(&source), validate(&source));
    }

    #[test]
    fn unknown_commands_reject(name in "[a-zA-Z]{1,12}") {
        prop_assume!(!matches!(
            name.as_str(),
            "neg" | "wedge" | "vee" | "rightarrow" | "leftrightarrow"
        ));
        let source = format!(r"(\{name} 1 2)");
        let error = check(&source).err();
        prop_assert!(error.is_some_and(|e| e.is_lexical()), "{}", source);
    }
}
