//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived scanner output before it is
//! paired with its text and span. Variant order mirrors the literal grammar;
//! logos resolves equal-length ties with `#[token]` winning over `#[regex]`,
//! so `self` is a keyword while `selfish` stays one identifier.

use logos::{Lexer, Logos};
use mt_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[token("$", lex_character)]
    Character,

    #[regex(r"#'([^']|'')*'")]
    #[regex(r"#[a-zA-Z0-9_]+")]
    Symbol,

    /// Integer, float or radix integer; the callback decides which.
    #[regex(r"[0-9]+", lex_number)]
    Number(NumberKind),

    #[token("self")]
    SelfKw,
    #[token("super")]
    Super,
    #[token("nil")]
    Nil,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token(":=")]
    Assign,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("&")]
    Ampersand,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(".")]
    Period,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("|")]
    Bar,
    #[token("^")]
    Caret,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    #[regex(r"'([^']|'')*'")]
    String,

    #[token("#(", lex_array)]
    Array,

    #[regex(r"#\[[^\]]*\]")]
    ByteArray,

    #[regex(r#""[^"]*""#)]
    Comment,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

impl RawToken {
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            RawToken::Character => TokenKind::Character,
            RawToken::Symbol => TokenKind::Symbol,
            RawToken::Number(NumberKind::Integer) => TokenKind::Integer,
            RawToken::Number(NumberKind::Float) => TokenKind::Float,
            RawToken::Number(NumberKind::Radix) => TokenKind::Radix,
            RawToken::SelfKw => TokenKind::SelfKw,
            RawToken::Super => TokenKind::Super,
            RawToken::Nil => TokenKind::Nil,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Ampersand => TokenKind::Ampersand,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Period => TokenKind::Period,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Bar => TokenKind::Bar,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::String => TokenKind::String,
            RawToken::Array => TokenKind::Array,
            RawToken::ByteArray => TokenKind::ByteArray,
            RawToken::Comment => TokenKind::Comment,
            RawToken::Whitespace => TokenKind::Whitespace,
        }
    }
}

/// Which numeric literal a run of leading digits turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberKind {
    Integer,
    Float,
    Radix,
}

/// Extend a digit run into the longest numeric literal it starts.
///
/// Radix `[0-9]+r[0-9A-Fa-f]+`, float `[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?`
/// with a fraction or an exponent, otherwise a plain integer. Suffixes that
/// do not complete (`3.`, `2e`, `16r`) are left for the next token.
fn lex_number(lex: &mut Lexer<RawToken>) -> NumberKind {
    let rest = lex.remainder().as_bytes();

    if rest.first() == Some(&b'r') {
        let digits = count_while(&rest[1..], |b| b.is_ascii_hexdigit());
        if digits > 0 {
            lex.bump(1 + digits);
            return NumberKind::Radix;
        }
    }

    let mut len = 0;
    let mut kind = NumberKind::Integer;
    if rest.first() == Some(&b'.') {
        let digits = count_while(&rest[1..], |b| b.is_ascii_digit());
        if digits > 0 {
            len = 1 + digits;
            kind = NumberKind::Float;
        }
    }
    if matches!(rest.get(len), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(rest.get(len + 1), Some(b'+' | b'-')));
        let digits = count_while(&rest[len + 1 + sign..], |b| b.is_ascii_digit());
        if digits > 0 {
            len += 1 + sign + digits;
            kind = NumberKind::Float;
        }
    }

    lex.bump(len);
    kind
}

fn count_while(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| pred(b)).count()
}

/// `$` takes exactly one following code point, whatever it is.
fn lex_character(lex: &mut Lexer<RawToken>) -> bool {
    match lex.remainder().chars().next() {
        Some(c) => {
            lex.bump(c.len_utf8());
            true
        }
        None => false,
    }
}

/// Consume up to the `)` that balances the opening `#(`.
///
/// Quoted text (`'...'`, with `''` as an escaped quote), comments and the
/// code point after `$` are opaque, so parentheses inside them do not count.
fn lex_array(lex: &mut Lexer<RawToken>) -> bool {
    match balanced_array_len(lex.remainder()) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => false,
    }
}

/// Byte length of `rest` up to and including the closing parenthesis.
pub(crate) fn balanced_array_len(rest: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            // A doubled quote closes and reopens, which reads the same.
            '\'' => {
                chars.by_ref().find(|&(_, c)| c == '\'')?;
            }
            '"' => {
                chars.by_ref().find(|&(_, c)| c == '"')?;
            }
            '$' => {
                chars.next()?;
            }
            _ => {}
        }
    }
    None
}
