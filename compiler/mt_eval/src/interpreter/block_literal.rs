//! `[:a :b | body]` literals.
//!
//! The header is a run of `:name` pairs closed by `|`. The body is not
//! evaluated: it is split into statement groups on top-level periods and
//! stored as `(kind, text)` pairs for replay on each call.

use mt_ir::{Span, Token, TokenKind};

use crate::errors::{EvalResult, SyntaxError};
use crate::value::{CodeBlock, StatementGroup, StoredToken};

use super::split_statements;

/// Build a block from the significant tokens between `[` and its `]`.
pub(crate) fn parse(tokens: &[Token], open: Span) -> EvalResult<CodeBlock> {
    let (params, body_start) = parse_header(tokens, open)?;
    let body = split_statements(&tokens[body_start..])
        .into_iter()
        .map(|statement| {
            statement
                .iter()
                .map(|token| StoredToken {
                    kind: token.kind,
                    text: token.text.clone(),
                })
                .collect::<StatementGroup>()
        })
        .collect();
    Ok(CodeBlock::new(params, body))
}

/// Parameter names and the index where the body starts.
fn parse_header(tokens: &[Token], open: Span) -> EvalResult<(Vec<String>, usize)> {
    let malformed = |reason, at: Option<&Token>| SyntaxError::MalformedBlock {
        reason,
        span: at.map_or(open, |token| token.span),
    };

    match tokens.first().map(|token| token.kind) {
        Some(TokenKind::Colon) => {}
        Some(TokenKind::Bar) => return Err(malformed("`|` before any parameter", tokens.first())),
        _ => return Ok((Vec::new(), 0)),
    }

    let mut params = Vec::new();
    let mut i = 0;
    loop {
        let token = tokens.get(i);
        match token.map(|token| token.kind) {
            Some(TokenKind::Colon) => match tokens.get(i + 1) {
                Some(name) if name.kind == TokenKind::Identifier => {
                    params.push(name.text.clone());
                    i += 2;
                }
                other => return Err(malformed("expected a parameter name after `:`", other.or(token))),
            },
            Some(TokenKind::Bar) => return Ok((params, i + 1)),
            _ => return Err(malformed("expected `|` after the parameters", token)),
        }
    }
}
