//! Lexical tokens.

use std::fmt;

use crate::Span;

/// Kind tag of a [`Token`].
///
/// Literal kinds carry no payload: the evaluator re-reads the token text,
/// which is what lets block bodies be stored as `(kind, text)` pairs and
/// replayed later.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Identifier,
    Integer,
    Float,
    /// `16rFF`
    Radix,
    String,
    Symbol,
    Character,
    /// `#( ... )`, captured whole with balanced parentheses.
    Array,
    /// `#[ ... ]`
    ByteArray,

    LParen,
    RParen,
    LBracket,
    RBracket,
    Period,
    Semicolon,
    Colon,
    Bar,
    Caret,

    Plus,
    Minus,
    Star,
    Slash,
    Ampersand,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    Assign,

    SelfKw,
    Super,
    Nil,
    True,
    False,

    Comment,
    Whitespace,
    /// One unmatched character.
    Illegal,
}

impl TokenKind {
    /// Whitespace and comments, kept in the raw stream for positions only.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Radix => "radix integer",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Character => "character",
            TokenKind::Array => "array literal",
            TokenKind::ByteArray => "byte array literal",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Period => "`.`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::Bar => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Ampersand => "`&`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::EqEq => "`==`",
            TokenKind::Assign => "`:=`",
            TokenKind::SelfKw => "`self`",
            TokenKind::Super => "`super`",
            TokenKind::Nil => "`nil`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Illegal => "illegal character",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source text and location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// A token rebuilt from stored `(kind, text)` data, with no source location.
    #[inline]
    pub fn synthetic(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, Span::DUMMY)
    }
}

#[cfg(test)]
mod tests;
