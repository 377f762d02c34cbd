use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds_and_text(source: &str) -> Vec<(TokenKind, String)> {
    tokenize_significant(source)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

fn seq(items: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    items.iter().map(|(k, t)| (*k, (*t).to_string())).collect()
}

#[test]
fn test_postcard() {
    use TokenKind::*;

    let source = "exampleWithNumber: x
    | y |
    true & false not & (nil isNil) ifFalse: [self halt].
    y := self size + super size.
    #($a #a 'a' 1 1.0)
        do: [ :each |
            Transcript show: (each class name);
                       show: ' '].
    ^x < y";

    let expected = seq(&[
        (Identifier, "exampleWithNumber"),
        (Colon, ":"),
        (Identifier, "x"),
        (Bar, "|"),
        (Identifier, "y"),
        (Bar, "|"),
        (True, "true"),
        (Ampersand, "&"),
        (False, "false"),
        (Identifier, "not"),
        (Ampersand, "&"),
        (LParen, "("),
        (Nil, "nil"),
        (Identifier, "isNil"),
        (RParen, ")"),
        (Identifier, "ifFalse"),
        (Colon, ":"),
        (LBracket, "["),
        (SelfKw, "self"),
        (Identifier, "halt"),
        (RBracket, "]"),
        (Period, "."),
        (Identifier, "y"),
        (Assign, ":="),
        (SelfKw, "self"),
        (Identifier, "size"),
        (Plus, "+"),
        (Super, "super"),
        (Identifier, "size"),
        (Period, "."),
        (Array, "#($a #a 'a' 1 1.0)"),
        (Identifier, "do"),
        (Colon, ":"),
        (LBracket, "["),
        (Colon, ":"),
        (Identifier, "each"),
        (Bar, "|"),
        (Identifier, "Transcript"),
        (Identifier, "show"),
        (Colon, ":"),
        (LParen, "("),
        (Identifier, "each"),
        (Identifier, "class"),
        (Identifier, "name"),
        (RParen, ")"),
        (Semicolon, ";"),
        (Identifier, "show"),
        (Colon, ":"),
        (String, "' '"),
        (RBracket, "]"),
        (Period, "."),
        (Caret, "^"),
        (Identifier, "x"),
        (Lt, "<"),
        (Identifier, "y"),
    ]);

    assert_eq!(kinds_and_text(source), expected);
}

#[test]
fn test_numbers() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("42 3.14 1e10 2.5e-3 16rFF 2r1010"),
        seq(&[
            (Integer, "42"),
            (Float, "3.14"),
            (Float, "1e10"),
            (Float, "2.5e-3"),
            (Radix, "16rFF"),
            (Radix, "2r1010"),
        ])
    );
}

#[test]
fn test_integer_followed_by_period() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("x := 3."),
        seq(&[(Identifier, "x"), (Assign, ":="), (Integer, "3"), (Period, ".")])
    );
}

#[test]
fn test_symbols() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("#foo #'hello world' #'it''s' #1"),
        seq(&[
            (Symbol, "#foo"),
            (Symbol, "#'hello world'"),
            (Symbol, "#'it''s'"),
            (Symbol, "#1"),
        ])
    );
}

#[test]
fn test_strings_with_escaped_quote() {
    let tokens = tokenize_significant("'it''s' 'a'");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "'it''s'");
    assert_eq!(tokens[1].text, "'a'");
}

#[test]
fn test_characters() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("$a $  $' $é"),
        seq(&[
            (Character, "$a"),
            (Character, "$ "),
            (Character, "$'"),
            (Character, "$é"),
        ])
    );
}

#[test]
fn test_reserved_words_need_word_boundary() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("self selfish nil nils true trueish false falsey super superb"),
        seq(&[
            (SelfKw, "self"),
            (Identifier, "selfish"),
            (Nil, "nil"),
            (Identifier, "nils"),
            (True, "true"),
            (Identifier, "trueish"),
            (False, "false"),
            (Identifier, "falsey"),
            (Super, "super"),
            (Identifier, "superb"),
        ])
    );
}

#[test]
fn test_nested_array_literal() {
    let tokens = tokenize_significant("#(1 #(2 3) 4) size");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Array);
    assert_eq!(tokens[0].text, "#(1 #(2 3) 4)");
}

#[test]
fn test_array_literal_ignores_quoted_parens() {
    let tokens = tokenize_significant("#(')' $) \"(\" #')(') x");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "#(')' $) \"(\" #')(')");
    assert_eq!(tokens[1].text, "x");
}

#[test]
fn test_unbalanced_array_literal_is_illegal_hash() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("#(1 2"),
        seq(&[
            (Illegal, "#"),
            (LParen, "("),
            (Integer, "1"),
            (Integer, "2"),
        ])
    );
}

#[test]
fn test_byte_array_literal() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("#[1 2 255] at: 1"),
        seq(&[
            (ByteArray, "#[1 2 255]"),
            (Identifier, "at"),
            (Colon, ":"),
            (Integer, "1"),
        ])
    );
}

#[test]
fn test_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("< <= > >= == := + - * / & ^ ; |"),
        seq(&[
            (Lt, "<"),
            (LtEq, "<="),
            (Gt, ">"),
            (GtEq, ">="),
            (EqEq, "=="),
            (Assign, ":="),
            (Plus, "+"),
            (Minus, "-"),
            (Star, "*"),
            (Slash, "/"),
            (Ampersand, "&"),
            (Caret, "^"),
            (Semicolon, ";"),
            (Bar, "|"),
        ])
    );
}

#[test]
fn test_comments_and_whitespace_are_kept_raw() {
    let tokens = tokenize("1 \"note\" 2");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::Whitespace,
            TokenKind::Comment,
            TokenKind::Whitespace,
            TokenKind::Integer,
        ]
    );
    assert_eq!(tokens[2].span, Span::new(2, 8));
}

#[test]
fn test_illegal_characters_one_at_a_time() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("1 ?? 2"),
        seq(&[
            (Integer, "1"),
            (Illegal, "?"),
            (Illegal, "?"),
            (Integer, "2"),
        ])
    );
}

#[test]
fn test_unterminated_string_and_comment() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_text("'abc"),
        seq(&[(Illegal, "'"), (Identifier, "abc")])
    );
    assert_eq!(kinds_and_text("\"x"), seq(&[(Illegal, "\""), (Identifier, "x")]));
}

#[test]
fn test_spans_point_into_source() {
    let source = "ab := 'c d'.";
    for token in tokenize(source) {
        assert_eq!(&source[token.span.to_range()], token.text);
    }
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize_significant("  \n\t ").is_empty());
}

#[test]
fn test_balanced_array_len() {
    assert_eq!(raw_token::balanced_array_len("1 2)"), Some(4));
    assert_eq!(raw_token::balanced_array_len("(1) 2) x"), Some(6));
    assert_eq!(raw_token::balanced_array_len("'))' )"), Some(6));
    assert_eq!(raw_token::balanced_array_len("1 2"), None);
    assert_eq!(raw_token::balanced_array_len("'open )"), None);
}

proptest! {
    #[test]
    fn prop_integer_literal_is_one_token(n in 0u64..=u64::MAX) {
        let text = n.to_string();
        let tokens = tokenize(&text);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(tokens[0].text.parse::<u64>().ok(), Some(n));
        prop_assert_eq!(tokens[0].span.len() as usize, text.len());
    }

    #[test]
    fn prop_tokenize_is_total(source in "\\PC{0,64}") {
        let tokens = tokenize(&source);
        let rebuilt: std::string::String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn prop_retokenizing_a_token_is_idempotent(
        source in "[a-z0-9 #$'\"()\\[\\]:=<>+*/&^|;.\n-]{0,48}"
    ) {
        for token in tokenize(&source) {
            let again = tokenize(&token.text);
            prop_assert_eq!(again.len(), 1, "token {:?} re-lexed as {:?}", token, again);
            prop_assert_eq!(again[0].kind, token.kind);
            prop_assert_eq!(&again[0].text, &token.text);
        }
    }
}
