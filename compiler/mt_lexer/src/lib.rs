//! Tokenizer for minitalk source text.
//!
//! [`tokenize`] is total: input that no rule matches becomes one
//! [`TokenKind::Illegal`] token per character, and scanning resumes right
//! after it. Whitespace and comments stay in the returned stream so that
//! spans remain meaningful; consumers filter them with
//! [`TokenKind::is_trivia`].

mod raw_token;

use logos::Logos;
use mt_ir::{Span, Token, TokenKind};

use raw_token::RawToken;

/// Tokenize `source` into an ordered sequence of tokens.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    // logos reports a failed match as one error spanning whatever it
    // consumed; restart one character later so each bad character is its
    // own illegal token.
    'scan: while offset < source.len() {
        let mut lexer = RawToken::lexer(&source[offset..]);
        while let Some(result) = lexer.next() {
            let range = lexer.span();
            let start = offset + range.start;
            match result {
                Ok(raw) => {
                    let span = Span::from_range(start..offset + range.end);
                    tokens.push(Token::new(raw.kind(), lexer.slice(), span));
                }
                Err(()) => {
                    let width = source[start..].chars().next().map_or(1, char::len_utf8);
                    let end = start + width;
                    tracing::trace!(start, "illegal character");
                    tokens.push(Token::new(
                        TokenKind::Illegal,
                        &source[start..end],
                        Span::from_range(start..end),
                    ));
                    offset = end;
                    continue 'scan;
                }
            }
        }
        break;
    }

    tokens
}

/// Tokenize and drop whitespace and comments.
pub fn tokenize_significant(source: &str) -> Vec<Token> {
    let mut tokens = tokenize(source);
    tokens.retain(|token| !token.kind.is_trivia());
    tokens
}

#[cfg(test)]
mod tests;
