//! Scalar literals: numbers, strings, symbols, characters and the reserved
//! words.

use std::num::IntErrorKind;

use mt_ir::{Token, TokenKind};

use crate::errors::{EvalResult, SyntaxError};
use crate::Value;

/// Build a numeric literal, applying a leading `-` when `negative`.
///
/// The sign is part of the parsed text so `-9223372036854775808` fits.
pub(crate) fn number(token: &Token, negative: bool) -> EvalResult<Value> {
    let sign = if negative { "-" } else { "" };
    match token.kind {
        TokenKind::Integer => format!("{sign}{}", token.text)
            .parse()
            .map(Value::Integer)
            .map_err(|_| SyntaxError::IntegerOverflow {
                text: token.text.clone(),
                span: token.span,
            }),
        TokenKind::Float => format!("{sign}{}", token.text)
            .parse()
            .map(Value::Float)
            .map_err(|_| SyntaxError::UnexpectedToken {
                kind: token.kind,
                span: token.span,
            }),
        TokenKind::Radix => radix(token, sign),
        kind => Err(SyntaxError::UnexpectedToken {
            kind,
            span: token.span,
        }),
    }
}

/// `NrDIGITS` with `2 <= N <= 36`.
fn radix(token: &Token, sign: &str) -> EvalResult<Value> {
    let (base_text, digits) = token.text.split_once('r').unwrap_or((token.text.as_str(), ""));
    let base = base_text
        .parse::<u32>()
        .ok()
        .filter(|base| (2..=36).contains(base))
        .ok_or_else(|| SyntaxError::InvalidRadixBase {
            base: base_text.to_string(),
            span: token.span,
        })?;
    i64::from_str_radix(&format!("{sign}{digits}"), base)
        .map(Value::Integer)
        .map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SyntaxError::IntegerOverflow {
                text: token.text.clone(),
                span: token.span,
            },
            _ => SyntaxError::InvalidRadixDigits {
                base,
                digits: digits.to_string(),
                span: token.span,
            },
        })
}

/// Text between single quotes, with `''` standing for one quote.
pub(crate) fn unquote(text: &str) -> String {
    let inner = text
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(text);
    inner.replace("''", "'")
}

/// Every literal that is not a number or a collection.
pub(crate) fn scalar(token: &Token) -> EvalResult<Value> {
    let text = token.text.as_str();
    Ok(match token.kind {
        TokenKind::String => Value::string(unquote(text)),
        TokenKind::Symbol => {
            let name = text.strip_prefix('#').unwrap_or(text);
            if name.starts_with('\'') {
                Value::symbol(unquote(name))
            } else {
                Value::symbol(name)
            }
        }
        TokenKind::Character => text
            .strip_prefix('$')
            .and_then(|rest| rest.chars().next())
            .map_or(Value::Nil, Value::Character),
        TokenKind::True => Value::Bool(true),
        TokenKind::False => Value::Bool(false),
        // No classes exist, so there is no object for `self` or `super` to name.
        TokenKind::Nil | TokenKind::SelfKw | TokenKind::Super => Value::Nil,
        TokenKind::Integer | TokenKind::Float | TokenKind::Radix => number(token, false)?,
        kind => {
            return Err(SyntaxError::UnexpectedToken {
                kind,
                span: token.span,
            })
        }
    })
}

/// What a misplaced `-` was applied to, for the diagnostic.
pub(crate) fn noun(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Identifier => "variables",
        TokenKind::String => "strings",
        TokenKind::Symbol => "symbols",
        TokenKind::Character => "characters",
        TokenKind::True | TokenKind::False => "booleans",
        TokenKind::Nil | TokenKind::SelfKw | TokenKind::Super => "nil",
        TokenKind::Array | TokenKind::ByteArray => "arrays",
        TokenKind::LParen => "expressions",
        TokenKind::LBracket => "blocks",
        _ => "this token",
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
