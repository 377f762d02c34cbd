//! `#( ... )` and `#[ ... ]` literals.
//!
//! The text between the delimiters is tokenized again and read element by
//! element. A failing element (an unbound name, a byte out of range, an
//! element that is not a literal) makes the whole literal evaluate to that
//! Error. Malformed numbers and misplaced signs are fatal, as they are
//! outside a literal.

use mt_ir::{Span, Token, TokenKind};

use crate::errors::{EvalResult, SyntaxError};
use crate::Value;

use super::{literal, Interpreter};

/// Tokens between the delimiters of a collection literal, with spans in
/// the coordinates of the enclosing source.
fn inner_tokens(token: &Token, open: &str, close: char) -> Vec<Token> {
    let inner = token
        .text
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .unwrap_or("");
    let offset = token.span.start + u32::try_from(open.len()).unwrap_or(0);
    mt_lexer::tokenize(inner)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| {
            let span = if token.span == Span::DUMMY {
                Span::DUMMY
            } else {
                t.span.shifted(offset)
            };
            Token::new(t.kind, t.text, span)
        })
        .collect()
}

fn invalid_byte(text: impl std::fmt::Display) -> Value {
    Value::value_error(format!("Invalid byte value: {text}"))
}

impl Interpreter<'_> {
    #[tracing::instrument(level = "trace", skip_all, fields(text = %token.text))]
    pub(crate) fn array_literal(&mut self, token: &Token) -> EvalResult<Value> {
        let mut elements = Vec::new();
        let mut sign: Option<Span> = None;

        for element in inner_tokens(token, "#(", ')') {
            let value = match element.kind {
                TokenKind::Plus => continue,
                TokenKind::Minus => {
                    sign = if sign.is_some() { None } else { Some(element.span) };
                    continue;
                }
                TokenKind::Integer | TokenKind::Float | TokenKind::Radix => {
                    literal::number(&element, sign.take().is_some())?
                }
                kind if sign.is_some() => {
                    return Err(SyntaxError::InvalidSign {
                        what: literal::noun(kind).to_string(),
                        span: element.span,
                    })
                }
                TokenKind::String
                | TokenKind::Symbol
                | TokenKind::Character
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nil => literal::scalar(&element)?,
                TokenKind::Identifier => match self.lookup_variable(&element.text) {
                    Some(value) => value,
                    None => return Ok(Value::name_error(format!("'{}' is not defined", element.text))),
                },
                TokenKind::Array => self.array_literal(&element)?,
                TokenKind::ByteArray => self.byte_array_literal(&element)?,
                _ => {
                    return Ok(Value::value_error(format!(
                        "invalid array element: {}",
                        element.text
                    )))
                }
            };
            if value.is_error() {
                return Ok(value);
            }
            elements.push(value);
        }

        if let Some(span) = sign {
            return Err(SyntaxError::InvalidSign {
                what: "the end of an array".to_string(),
                span,
            });
        }
        Ok(Value::array(elements))
    }

    #[tracing::instrument(level = "trace", skip_all, fields(text = %token.text))]
    pub(crate) fn byte_array_literal(&mut self, token: &Token) -> EvalResult<Value> {
        let mut bytes = Vec::new();

        for element in inner_tokens(token, "#[", ']') {
            let number = match element.kind {
                TokenKind::Integer | TokenKind::Radix => {
                    literal::number(&element, false)?.as_int()
                }
                TokenKind::Float => literal::number(&element, false)?.as_float().map(truncate),
                TokenKind::Character => match literal::scalar(&element)? {
                    Value::Character(c) => Some(i64::from(u32::from(c))),
                    _ => None,
                },
                TokenKind::String | TokenKind::Symbol => match literal::scalar(&element)? {
                    Value::String(text) | Value::Symbol(text) => text.trim().parse().ok(),
                    _ => None,
                },
                TokenKind::True => Some(1),
                TokenKind::False => Some(0),
                TokenKind::Identifier => match self.lookup_variable(&element.text) {
                    Some(Value::Integer(n)) => Some(n),
                    Some(Value::Float(x)) => Some(truncate(x)),
                    Some(other) => return Ok(invalid_byte(other)),
                    None => return Ok(Value::name_error(format!("'{}' is not defined", element.text))),
                },
                _ => None,
            };
            match number.and_then(|n| u8::try_from(n).ok()) {
                Some(byte) => bytes.push(byte),
                None => {
                    return Ok(match number {
                        Some(n) => invalid_byte(n),
                        None => invalid_byte(&element.text),
                    })
                }
            }
        }

        Ok(Value::byte_array(bytes))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "a float byte element truncates toward zero"
)]
fn truncate(x: f64) -> i64 {
    x.trunc() as i64
}
