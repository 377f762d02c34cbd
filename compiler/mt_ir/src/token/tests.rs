use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_trivia_classification() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    assert!(!TokenKind::Period.is_trivia());
    assert!(!TokenKind::Illegal.is_trivia());
}

#[test]
fn test_synthetic_token_has_dummy_span() {
    let token = Token::synthetic(TokenKind::Identifier, "x");
    assert_eq!(token.span, Span::DUMMY);
    assert_eq!(token.text, "x");
    assert_eq!(token.kind, TokenKind::Identifier);
}

#[test]
fn test_display_names() {
    assert_eq!(TokenKind::Assign.to_string(), "`:=`");
    assert_eq!(TokenKind::Array.to_string(), "array literal");
}
