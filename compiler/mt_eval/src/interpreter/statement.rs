//! One statement, parsed and executed in a single pass.
//!
//! Precedence comes from deferring sends rather than from a grammar:
//!
//! - a unary message applies at once to the value just produced
//! - a binary operator becomes a [`PendingSend`] that waits for its operand
//!   and only runs when the next operator, keyword or the statement end
//!   arrives, so unary sends on the operand finish first
//! - keyword parts accumulate into one [`KeywordSend`] that runs last
//!
//! So `3 + 4 factorial` is `3 + 24`, `3 + 4 * 5` is `35`, and
//! `a at: 1 + 1 put: b size` sends `at:put:` once with `2` and `b size`.

use mt_ir::{BinaryOp, Span, Token, TokenKind};
use smallvec::SmallVec;

use crate::dispatch::{self, Call, Message, Method};
use crate::errors::{EvalResult, SyntaxError};
use crate::methods::not_understood;
use crate::{Object, Value};

use super::{block_literal, literal, Interpreter};

/// What a statement produced.
#[derive(Debug, Default)]
pub(crate) struct Outcome {
    pub(crate) result: Option<Object>,
    /// The statement began with `^`.
    pub(crate) returned: bool,
}

/// How a pending binary send completes once its operand arrives.
#[derive(Debug)]
enum PendingOutcome {
    Normal(Method),
    /// The receiver has no such message. The TypeError names the operand's
    /// class too, so it waits for the operand.
    AwaitingOperandForError { receiver_class: &'static str },
    /// The receiver is an Error and answers itself.
    Propagate,
}

#[derive(Debug)]
struct PendingSend {
    receiver: Value,
    /// Operator symbol or selector, for diagnostics.
    label: &'static str,
    /// Sent by name (`3 max 4`) rather than as an operator.
    named: bool,
    outcome: PendingOutcome,
    operand: Option<Object>,
    span: Span,
}

#[derive(Debug)]
struct KeywordSend {
    receiver: Value,
    /// First keyword with its colon, e.g. `at:`.
    primary: String,
    /// Later keywords without colons, e.g. `put`.
    parts: Vec<String>,
    args: SmallVec<[Value; 2]>,
    span: Span,
}

impl KeywordSend {
    fn selector(&self) -> String {
        let mut selector = self.primary.clone();
        for part in &self.parts {
            selector.push_str(part);
            selector.push(':');
        }
        selector
    }
}

#[derive(Debug, Default)]
struct Statement {
    /// `a := b := ...` names, bound to the final value.
    targets: Vec<(String, Span)>,
    value: Option<Object>,
    pending: Option<PendingSend>,
    keyword: Option<KeywordSend>,
    /// A `-` waiting for a number.
    sign: Option<Span>,
    /// Receiver of the most recent send, for `;`.
    last_receiver: Option<Value>,
    returning: bool,
    started: bool,
}

impl Statement {
    /// Take the value the next unary message applies to. `None` means the
    /// statement is waiting for a value instead.
    fn take_current(&mut self) -> Option<Object> {
        match &mut self.pending {
            Some(pending) => pending.operand.take(),
            None => self.value.take(),
        }
    }

    fn awaiting_value(&self) -> bool {
        match &self.pending {
            Some(pending) => pending.operand.is_none(),
            None => self.value.is_none(),
        }
    }

    fn can_assign(&self) -> bool {
        self.value.is_none()
            && self.pending.is_none()
            && self.keyword.is_none()
            && self.sign.is_none()
            && self.last_receiver.is_none()
    }

    /// Place a freshly produced value.
    fn feed(&mut self, value: Object, span: Span) -> EvalResult<()> {
        let slot = match &mut self.pending {
            Some(pending) => &mut pending.operand,
            None => &mut self.value,
        };
        if slot.is_some() {
            return Err(SyntaxError::AdjacentValues { span });
        }
        *slot = Some(value);
        Ok(())
    }

    fn toggle_sign(&mut self, span: Span) {
        self.sign = match self.sign {
            Some(_) => None,
            None => Some(span),
        };
    }

    fn reject_sign(&mut self, what: &str) -> EvalResult<()> {
        match self.sign.take() {
            Some(span) => Err(SyntaxError::InvalidSign {
                what: what.to_string(),
                span,
            }),
            None => Ok(()),
        }
    }

    /// Run the pending binary send, if any, leaving its result as the
    /// current value.
    fn reduce(&mut self, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        let Some(operand) = pending.operand else {
            let selector = pending.label.to_string();
            return Err(if pending.named {
                SyntaxError::ArgumentRequired {
                    selector,
                    span: pending.span,
                }
            } else {
                SyntaxError::MissingArgument {
                    selector,
                    span: pending.span,
                }
            });
        };
        let result = match pending.outcome {
            PendingOutcome::Normal(method) => {
                self.last_receiver = Some(pending.receiver.clone());
                interp.call_span = pending.span;
                method.invoke(interp, &pending.receiver, &Call::unary(operand.into_value()))?
            }
            PendingOutcome::AwaitingOperandForError { receiver_class } => {
                Object::new(Value::type_error(format!(
                    "Message doesn't exist for {receiver_class} and {}",
                    operand.class_name()
                )))
            }
            PendingOutcome::Propagate => Object::new(pending.receiver),
        };
        self.value = Some(result);
        Ok(())
    }

    /// Reduce, then make the current value the receiver of a new pending
    /// send answered by `method`.
    fn start_pending(
        &mut self,
        interp: &mut Interpreter<'_>,
        label: &'static str,
        named: bool,
        span: Span,
        method: impl FnOnce(&Value) -> Option<Method>,
        missing: impl FnOnce() -> SyntaxError,
    ) -> EvalResult<()> {
        self.reduce(interp)?;
        let receiver = self.value.take().ok_or_else(missing)?.into_value();
        let outcome = if receiver.is_error() {
            PendingOutcome::Propagate
        } else {
            match method(&receiver) {
                Some(method) => PendingOutcome::Normal(method),
                None => PendingOutcome::AwaitingOperandForError {
                    receiver_class: receiver.class_name(),
                },
            }
        };
        self.pending = Some(PendingSend {
            receiver,
            label,
            named,
            outcome,
            operand: None,
            span,
        });
        Ok(())
    }

    fn send_binary(&mut self, interp: &mut Interpreter<'_>, op: BinaryOp, span: Span) -> EvalResult<()> {
        if let Some(sign) = self.sign.take() {
            return Err(SyntaxError::MissingReceiver { op, span: sign });
        }
        self.start_pending(
            interp,
            op.as_symbol(),
            false,
            span,
            |receiver| dispatch::lookup_binary(receiver, op),
            || SyntaxError::MissingReceiver { op, span },
        )
    }

    /// `receiver selector` with no colon.
    fn send_unary(
        &mut self,
        interp: &mut Interpreter<'_>,
        receiver: Object,
        selector: &str,
        span: Span,
    ) -> EvalResult<()> {
        let result = match dispatch::lookup(&receiver, selector) {
            Message::Nullary(method) => {
                self.last_receiver = Some(receiver.value.clone());
                interp.call_span = span;
                method.invoke(interp, &receiver, &Call::none())?
            }
            Message::Property(value) => {
                self.last_receiver = Some(receiver.value.clone());
                Object::new(value)
            }
            // A one-argument message sent by name waits for its operand
            // like a binary operator does.
            Message::Unary(method) => {
                self.feed(receiver, span)?;
                let label = method.selector;
                return self.start_pending(
                    interp,
                    label,
                    true,
                    span,
                    |receiver| match dispatch::lookup(receiver, label) {
                        Message::Unary(method) => Some(method),
                        _ => None,
                    },
                    || SyntaxError::ArgumentRequired {
                        selector: label.to_string(),
                        span,
                    },
                );
            }
            Message::NotFound if receiver.is_error() => Object::new(receiver.value),
            Message::NotFound => Object::new(not_understood(&receiver, selector)),
        };
        self.feed(result, span)
    }

    /// One `name:` part of a keyword message.
    fn keyword_part(&mut self, interp: &mut Interpreter<'_>, name: &str, span: Span) -> EvalResult<()> {
        self.reject_sign("keywords")?;
        self.reduce(interp)?;
        let value = self.value.take();
        match &mut self.keyword {
            None => {
                let receiver = value.ok_or_else(|| SyntaxError::KeywordWithoutReceiver {
                    keyword: name.to_string(),
                    span,
                })?;
                self.keyword = Some(KeywordSend {
                    receiver: receiver.into_value(),
                    primary: format!("{name}:"),
                    parts: Vec::new(),
                    args: SmallVec::new(),
                    span,
                });
            }
            Some(send) => {
                let arg = value.ok_or_else(|| SyntaxError::MissingArgument {
                    selector: send.selector(),
                    span,
                })?;
                send.args.push(arg.into_value());
                send.parts.push(name.to_string());
            }
        }
        Ok(())
    }

    fn send_keyword(&mut self, interp: &mut Interpreter<'_>, send: KeywordSend) -> EvalResult {
        let selector = send.selector();
        let KeywordSend {
            receiver,
            primary,
            parts,
            args,
            span,
        } = send;
        let method = match dispatch::lookup(&receiver, &primary) {
            Message::Unary(method) => method,
            _ if receiver.is_error() => return Ok(Object::new(receiver)),
            _ => return Ok(Object::new(not_understood(&receiver, &selector))),
        };
        let Ok(companion) = dispatch::resolve_companion(&method, &parts) else {
            if receiver.is_error() {
                return Ok(Object::new(receiver));
            }
            return Ok(Object::new(not_understood(&receiver, &selector)));
        };
        self.last_receiver = Some(receiver.clone());
        interp.call_span = span;
        method.invoke(interp, &receiver, &Call { args, companion })
    }

    /// Finish every send in progress and answer the value.
    fn complete(&mut self, interp: &mut Interpreter<'_>) -> EvalResult<Option<Object>> {
        if let Some(span) = self.sign.take() {
            return Err(SyntaxError::InvalidSign {
                what: "a missing operand".to_string(),
                span,
            });
        }
        self.reduce(interp)?;
        let value = self.value.take();
        let Some(mut send) = self.keyword.take() else {
            return Ok(value);
        };
        let arg = value.ok_or_else(|| SyntaxError::MissingArgument {
            selector: send.selector(),
            span: send.span,
        })?;
        send.args.push(arg.into_value());
        self.send_keyword(interp, send).map(Some)
    }

    /// `;` resends to the receiver of the last message.
    fn cascade(&mut self, interp: &mut Interpreter<'_>, span: Span) -> EvalResult<()> {
        self.complete(interp)?;
        let receiver = self
            .last_receiver
            .clone()
            .ok_or(SyntaxError::InvalidCascade { span })?;
        self.value = Some(Object::new(receiver));
        Ok(())
    }

    fn finish(mut self, interp: &mut Interpreter<'_>) -> EvalResult<Outcome> {
        let result = self.complete(interp)?;
        let result = match self.targets.last() {
            None => result,
            Some((_, span)) => {
                let value = result
                    .ok_or(SyntaxError::InvalidAssignment { span: *span })?
                    .into_value();
                for (name, _) in &self.targets {
                    interp.assign(name, value.clone());
                }
                Some(Object::silent(value))
            }
        };
        Ok(Outcome {
            result,
            returned: self.returning,
        })
    }
}

/// Index of the token closing the group opened at `open`.
fn matching_close(tokens: &[Token], open: usize, open_kind: TokenKind, close_kind: TokenKind) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        if token.kind == open_kind {
            depth += 1;
        } else if token.kind == close_kind {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// An opener with no matching close before the statement ends.
fn unclosed(tokens: &[Token], opener: &Token, delimiter: char) -> SyntaxError {
    let end = tokens
        .iter()
        .rev()
        .find(|token| !token.kind.is_trivia())
        .map_or(opener.span, |token| token.span);
    SyntaxError::Unclosed {
        delimiter,
        span: opener.span,
        end,
    }
}

impl Interpreter<'_> {
    /// Evaluate one statement (no top-level periods).
    pub(crate) fn run_statement(&mut self, tokens: &[Token]) -> EvalResult<Outcome> {
        let mut state = Statement::default();
        let mut pos = 0;

        while let Some(token) = tokens.get(pos) {
            pos += 1;
            if token.kind.is_trivia() {
                continue;
            }
            let next = tokens.get(pos).map(|t| t.kind);
            let first = !state.started;
            state.started = true;

            if let Some(op) = BinaryOp::from_kind(token.kind) {
                if op == BinaryOp::Sub && state.awaiting_value() {
                    state.toggle_sign(token.span);
                } else {
                    state.send_binary(self, op, token.span)?;
                }
                continue;
            }

            match token.kind {
                TokenKind::Identifier if next == Some(TokenKind::Colon) => {
                    pos += 1;
                    state.keyword_part(self, &token.text, token.span)?;
                }
                TokenKind::Identifier => {
                    if let Some(receiver) = state.take_current() {
                        state.send_unary(self, receiver, &token.text, token.span)?;
                    } else if next == Some(TokenKind::Assign) {
                        if !state.can_assign() {
                            return Err(SyntaxError::InvalidAssignment { span: token.span });
                        }
                        pos += 1;
                        state.targets.push((token.text.clone(), token.span));
                    } else {
                        state.reject_sign(literal::noun(token.kind))?;
                        let value = self.lookup_variable(&token.text).unwrap_or_else(|| {
                            Value::name_error(format!("'{}' is not defined", token.text))
                        });
                        state.feed(Object::new(value), token.span)?;
                    }
                }
                TokenKind::Integer | TokenKind::Float | TokenKind::Radix => {
                    let negative = state.sign.take().is_some();
                    let value = literal::number(token, negative)?;
                    state.feed(Object::new(value), token.span)?;
                }
                TokenKind::String
                | TokenKind::Symbol
                | TokenKind::Character
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nil
                | TokenKind::SelfKw
                | TokenKind::Super => {
                    state.reject_sign(literal::noun(token.kind))?;
                    state.feed(Object::new(literal::scalar(token)?), token.span)?;
                }
                TokenKind::Array => {
                    state.reject_sign(literal::noun(token.kind))?;
                    let value = self.array_literal(token)?;
                    state.feed(Object::new(value), token.span)?;
                }
                TokenKind::ByteArray => {
                    state.reject_sign(literal::noun(token.kind))?;
                    let value = self.byte_array_literal(token)?;
                    state.feed(Object::new(value), token.span)?;
                }
                TokenKind::LParen => {
                    let close = matching_close(tokens, pos - 1, TokenKind::LParen, TokenKind::RParen)
                        .ok_or_else(|| unclosed(tokens, token, '('))?;
                    let inner = &tokens[pos..close];
                    let span = token.span.merge(tokens[close].span);
                    pos = close + 1;
                    state.reject_sign(literal::noun(token.kind))?;
                    let value = self
                        .evaluate_nested(inner)?
                        .ok_or(SyntaxError::EmptyParentheses { span })?;
                    state.feed(Object::new(value.into_value()), span)?;
                }
                TokenKind::LBracket => {
                    let close = matching_close(tokens, pos - 1, TokenKind::LBracket, TokenKind::RBracket)
                        .ok_or_else(|| unclosed(tokens, token, '['))?;
                    let block = block_literal::parse(&tokens[pos..close], token.span)?;
                    let span = token.span.merge(tokens[close].span);
                    pos = close + 1;
                    state.reject_sign(literal::noun(token.kind))?;
                    let block = self.capture(block);
                    state.feed(Object::new(Value::block(block)), span)?;
                }
                TokenKind::RParen => {
                    return Err(SyntaxError::UnmatchedClose {
                        delimiter: ')',
                        span: token.span,
                    })
                }
                TokenKind::RBracket => {
                    return Err(SyntaxError::UnmatchedClose {
                        delimiter: ']',
                        span: token.span,
                    })
                }
                TokenKind::Semicolon => state.cascade(self, token.span)?,
                TokenKind::Caret if first => state.returning = true,
                TokenKind::Assign => return Err(SyntaxError::InvalidAssignment { span: token.span }),
                TokenKind::Illegal => {
                    return Err(SyntaxError::InvalidCharacter {
                        text: token.text.clone(),
                        span: token.span,
                    })
                }
                kind => {
                    return Err(SyntaxError::UnexpectedToken {
                        kind,
                        span: token.span,
                    })
                }
            }
        }

        state.finish(self)
    }
}
