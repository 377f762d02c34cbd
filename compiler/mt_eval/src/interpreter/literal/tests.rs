use super::*;
use mt_ir::Span;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn token(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text, Span::new(0, u32::try_from(text.len()).unwrap()))
}

#[test]
fn test_integers() {
    assert_eq!(number(&token(TokenKind::Integer, "42"), false), Ok(Value::Integer(42)));
    assert_eq!(number(&token(TokenKind::Integer, "42"), true), Ok(Value::Integer(-42)));
    assert_eq!(
        number(&token(TokenKind::Integer, "9223372036854775808"), true),
        Ok(Value::Integer(i64::MIN))
    );
    assert!(matches!(
        number(&token(TokenKind::Integer, "9223372036854775808"), false),
        Err(SyntaxError::IntegerOverflow { .. })
    ));
}

#[test]
fn test_floats() {
    assert_eq!(number(&token(TokenKind::Float, "2.5"), false), Ok(Value::Float(2.5)));
    assert_eq!(number(&token(TokenKind::Float, "1e3"), true), Ok(Value::Float(-1000.0)));
}

#[test]
fn test_radix() {
    assert_eq!(number(&token(TokenKind::Radix, "16rff"), false), Ok(Value::Integer(255)));
    assert_eq!(number(&token(TokenKind::Radix, "2r101"), true), Ok(Value::Integer(-5)));
    assert_eq!(number(&token(TokenKind::Radix, "36rZ"), false), Ok(Value::Integer(35)));
}

#[test]
fn test_radix_errors() {
    assert_eq!(
        number(&token(TokenKind::Radix, "1r0"), false),
        Err(SyntaxError::InvalidRadixBase {
            base: "1".into(),
            span: Span::new(0, 3),
        })
    );
    assert_eq!(
        number(&token(TokenKind::Radix, "2r12"), false),
        Err(SyntaxError::InvalidRadixDigits {
            base: 2,
            digits: "12".into(),
            span: Span::new(0, 4),
        })
    );
    assert!(matches!(
        number(&token(TokenKind::Radix, "16rFFFFFFFFFFFFFFFFF"), false),
        Err(SyntaxError::IntegerOverflow { .. })
    ));
}

#[test]
fn test_unquote() {
    assert_eq!(unquote("'abc'"), "abc");
    assert_eq!(unquote("'it''s'"), "it's");
    assert_eq!(unquote("''"), "");
}

#[test]
fn test_scalars() {
    assert_eq!(scalar(&token(TokenKind::String, "'a b'")), Ok(Value::string("a b")));
    assert_eq!(scalar(&token(TokenKind::Symbol, "#abc")), Ok(Value::symbol("abc")));
    assert_eq!(scalar(&token(TokenKind::Symbol, "#'a b'")), Ok(Value::symbol("a b")));
    assert_eq!(scalar(&token(TokenKind::Symbol, "#1")), Ok(Value::symbol("1")));
    assert_eq!(scalar(&token(TokenKind::Character, "$ ")), Ok(Value::Character(' ')));
    assert_eq!(scalar(&token(TokenKind::False, "false")), Ok(Value::Bool(false)));
    assert_eq!(scalar(&token(TokenKind::Super, "super")), Ok(Value::Nil));
    assert!(scalar(&token(TokenKind::Bar, "|")).is_err());
}

#[test]
fn test_nouns() {
    assert_eq!(noun(TokenKind::Identifier), "variables");
    assert_eq!(noun(TokenKind::LBracket), "blocks");
    assert_eq!(noun(TokenKind::Period), "this token");
}

proptest! {
    #[test]
    fn prop_decimal_integers_parse(n in any::<i64>()) {
        let text = n.unsigned_abs().to_string();
        let parsed = number(&token(TokenKind::Integer, &text), n < 0);
        prop_assert_eq!(parsed, Ok(Value::Integer(n)));
    }

    #[test]
    fn prop_radix_matches_std(n in 0i64..i64::MAX, base in 2u32..=16) {
        let digits = to_radix(n, base);
        let parsed = number(&token(TokenKind::Radix, &format!("{base}r{digits}")), false);
        prop_assert_eq!(parsed, Ok(Value::Integer(n)));
    }
}

fn to_radix(mut n: i64, base: u32) -> String {
    if n == 0 {
        return "0".into();
    }
    let base = i64::from(base);
    let mut digits = Vec::new();
    while n > 0 {
        let digit = u32::try_from(n % base).unwrap();
        digits.push(char::from_digit(digit, 36).unwrap());
        n /= base;
    }
    digits.iter().rev().collect()
}
