use super::*;

const CONNECTIVES: [Connective; 5] = [
    Connective::Negation,
    Connective::Conjunction,
    Connective::Disjunction,
    Connective::Implication,
    Connective::Biconditional,
];

// === Connective ===

#[test]
fn every_connective_round_trips_through_its_command() {
    for connective in CONNECTIVES {
        assert_eq!(
            Connective::from_command(connective.command()),
            Some(connective),
            "{connective:?}"
        );
    }
}

#[test]
fn only_negation_is_unary() {
    for connective in CONNECTIVES {
        let unary = connective == Connective::Negation;
        assert_eq!(connective.arity() == 1, unary);
        assert_eq!(
            connective.token_kind() == TokenKind::UnaryOperator,
            unary,
            "{connective:?}"
        );
    }
}

#[test]
fn command_lookup_is_exact() {
    assert_eq!(Connective::from_command("neg"), None);
    assert_eq!(Connective::from_command(r"\Neg"), None);
    assert_eq!(Connective::from_command(r"\negation"), None);
    assert_eq!(Connective::from_command(r"\land"), None);
    assert_eq!(Connective::from_command(r"\"), None);
}

// === TokenKind ===

#[test]
fn lexeme_bearing_kinds() {
    assert!(TokenKind::UnaryOperator.has_lexeme());
    assert!(TokenKind::BinaryOperator.has_lexeme());
    assert!(TokenKind::Proposition.has_lexeme());
    assert!(TokenKind::Constant.has_lexeme());
    assert!(!TokenKind::OpenParen.has_lexeme());
    assert!(!TokenKind::CloseParen.has_lexeme());
    assert!(!TokenKind::Eof.has_lexeme());
}

#[test]
fn atoms_are_propositions_and_constants() {
    assert!(TokenKind::Proposition.is_atom());
    assert!(TokenKind::Constant.is_atom());
    assert!(!TokenKind::OpenParen.is_atom());
    assert!(!TokenKind::UnaryOperator.is_atom());
}

// === Token ===

#[test]
fn operator_tokens_resolve_their_connective() {
    let token = Token::new(TokenKind::BinaryOperator, Some(r"\vee"), Span::new(1, 5));
    assert_eq!(token.connective(), Some(Connective::Disjunction));

    let token = Token::new(TokenKind::Proposition, Some("1"), Span::new(0, 1));
    assert_eq!(token.connective(), None);
}

#[test]
fn display_forms() {
    let neg = Token::new(TokenKind::UnaryOperator, Some(r"\neg"), Span::new(1, 5));
    assert_eq!(neg.to_string(), r"Token(UnaryOperator, \neg)");
    assert_eq!(Token::eof(3).to_string(), "Token(Eof)");
    assert_eq!(Span::new(2, 7).to_string(), "2..7");
}

#[test]
fn eof_span_is_empty() {
    let eof = Token::eof(4);
    assert_eq!(eof.span, Span::new(4, 4));
}
