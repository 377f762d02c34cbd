//! The evaluator.
//!
//! There is no syntax tree: each statement is parsed and executed in the
//! same left-to-right pass over its tokens (see [`statement`]). Parentheses,
//! collection literals and block bodies re-enter the evaluator
//! recursively, always through [`ensure_sufficient_stack`].
//!
//! # Module Structure
//!
//! - [`statement`]: the per-statement state machine
//! - [`literal`]: numbers, strings, symbols, characters
//! - [`array_literal`]: `#( )` and `#[ ]`
//! - [`block_literal`]: `[:x | ...]`
//! - [`frame`]: activation records for block calls

mod array_literal;
mod block_literal;
mod frame;
mod literal;
mod statement;

use mt_diagnostic::emitter::DiagnosticEmitter;
use mt_ir::{Span, Token, TokenKind};
use mt_stack::ensure_sufficient_stack;

use crate::config::{EvalConfig, LAST_RESULT};
use crate::errors::{EvalResult, SyntaxError};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::scope::Scope;
use crate::value::CodeBlock;
use crate::{Object, Value};

use frame::Activation;

/// Evaluates token streams against a caller-owned [`Scope`].
///
/// Fatal syntax errors are reported to the emitter and discard only the
/// statement they occur in.
pub struct Interpreter<'a> {
    scope: &'a mut dyn Scope,
    emitter: &'a mut dyn DiagnosticEmitter,
    printer: SharedPrintHandler,
    config: EvalConfig,
    frames: Vec<Activation>,
    /// Location of the send being dispatched, for errors raised inside it.
    call_span: Span,
}

impl<'a> Interpreter<'a> {
    pub fn new(scope: &'a mut dyn Scope, emitter: &'a mut dyn DiagnosticEmitter) -> Self {
        Interpreter {
            scope,
            emitter,
            printer: stdout_handler(),
            config: EvalConfig::default(),
            frames: Vec::new(),
            call_span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Send `printNl` / `displayNl` output somewhere other than stdout.
    #[must_use]
    pub fn with_print_handler(mut self, printer: SharedPrintHandler) -> Self {
        self.printer = printer;
        self
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate every period-separated statement in `tokens`.
    ///
    /// Returns one result per statement that produced a value. A statement
    /// discarded by a syntax error contributes nothing; the ones after it
    /// still run.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn evaluate(&mut self, tokens: &[Token]) -> Vec<Object> {
        let tokens = significant(tokens);
        let mut results = Vec::new();
        for statement in split_statements(&tokens) {
            match self.run_statement(statement) {
                Ok(outcome) => {
                    let Some(result) = outcome.result else {
                        continue;
                    };
                    if self.config.store_last_result {
                        self.scope.set(LAST_RESULT, result.value.clone());
                    }
                    results.push(result);
                }
                Err(err) => self.report(&err),
            }
        }
        results
    }

    /// Tokenize and evaluate `source`.
    pub fn evaluate_source(&mut self, source: &str) -> Vec<Object> {
        self.evaluate(&mt_lexer::tokenize(source))
    }

    fn report(&mut self, err: &SyntaxError) {
        let diagnostic = err.to_diagnostic();
        tracing::warn!(
            code = %diagnostic.code,
            span = ?diagnostic.primary_span(),
            "statement discarded: {}",
            diagnostic.message
        );
        self.emitter.emit(&diagnostic);
    }

    /// Evaluate a parenthesized run and answer its last result. Errors
    /// abort the enclosing statement.
    pub(crate) fn evaluate_nested(&mut self, tokens: &[Token]) -> EvalResult<Option<Object>> {
        ensure_sufficient_stack(|| {
            let mut last = None;
            for statement in split_statements(tokens) {
                if let Some(result) = self.run_statement(statement)?.result {
                    last = Some(result);
                }
            }
            Ok(last)
        })
    }

    /// Call `block` with `args`.
    ///
    /// Too few arguments curry: the answer is a new block over the
    /// remaining parameters. Too many answer a `ValueError`. A full call
    /// replays the body statement by statement in a fresh activation; `^`
    /// ends it early. The answer is the last statement's result, or nil.
    #[tracing::instrument(level = "debug", skip_all, fields(arity = block.arity(), args = args.len()))]
    pub fn call_block(&mut self, block: &CodeBlock, args: Vec<Value>) -> EvalResult {
        if args.len() > block.arity() {
            return Ok(Object::new(Value::value_error(format!(
                "CodeBlock expects {} arguments, got {}",
                block.arity(),
                args.len()
            ))));
        }
        if args.len() < block.arity() {
            return Ok(Object::new(Value::block(block.curry(args))));
        }
        if self.frames.len() >= self.config.max_block_depth {
            return Err(SyntaxError::RecursionLimit {
                limit: self.config.max_block_depth,
                span: self.call_span,
            });
        }

        let activation = Activation::for_call(block, args);
        ensure_sufficient_stack(|| {
            let mut frame = self.push_frame(activation);
            let mut last = None;
            for statement in block.statements() {
                let outcome = frame.run_statement(&statement)?;
                if outcome.result.is_some() {
                    last = outcome.result;
                }
                if outcome.returned {
                    break;
                }
            }
            Ok(Object::new(last.map_or(Value::Nil, Object::into_value)))
        })
    }

    /// Call `value` if it is a block; any other value answers itself.
    pub fn call_value(&mut self, value: &Value, args: Vec<Value>) -> EvalResult {
        match value {
            Value::CodeBlock(block) => self.call_block(block, args),
            other => Ok(Object::new(other.clone())),
        }
    }

    pub(crate) fn print_line(&self, line: &str) {
        self.printer.println(line);
    }

    /// Resolve a variable: the running block's bindings, then the copies it
    /// captured where it was written, then the session scope.
    ///
    /// Frames of callers are never consulted, so a block sees the names of
    /// the code that created it rather than of whoever happens to call it.
    pub fn lookup_variable(&self, name: &str) -> Option<Value> {
        self.frames
            .last()
            .and_then(|frame| frame.get(name).or_else(|| frame.get_captured(name)))
            .cloned()
            .or_else(|| self.scope.get(name))
    }

    /// Store into the running block's frame when it knows `name`, else the
    /// scope.
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        match self.frames.last_mut() {
            Some(frame) if frame.get(name).is_some() || frame.get_captured(name).is_some() => {
                tracing::debug!(name, "frame assign");
                frame.assign(name, value);
            }
            _ => {
                tracing::debug!(name, "scope assign");
                self.scope.set(name, value);
            }
        }
    }

    /// Attach the current frame's variables to a block literal written
    /// inside a block body.
    pub(crate) fn capture(&self, block: CodeBlock) -> CodeBlock {
        match self.frames.last() {
            Some(frame) => {
                let captured = frame.capture(block.params());
                block.with_captured(captured)
            }
            None => block,
        }
    }
}

/// Evaluate `tokens` against `scope`, printing to stdout.
pub fn evaluate(
    tokens: &[Token],
    scope: &mut dyn Scope,
    emitter: &mut dyn DiagnosticEmitter,
) -> Vec<Object> {
    Interpreter::new(scope, emitter).evaluate(tokens)
}

/// Drop whitespace and comments.
fn significant(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .filter(|token| !token.kind.is_trivia())
        .cloned()
        .collect()
}

/// Split on periods outside any parentheses or brackets. Empty statements
/// are dropped.
pub(crate) fn split_statements(tokens: &[Token]) -> Vec<&[Token]> {
    let mut statements = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LParen | TokenKind::LBracket => depth += 1,
            TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
            TokenKind::Period if depth == 0 => {
                if i > start {
                    statements.push(&tokens[start..i]);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < tokens.len() {
        statements.push(&tokens[start..]);
    }
    statements
}

#[cfg(test)]
mod tests;
