//! Block closures.

use std::fmt;
use std::rc::Rc;

use mt_ir::{Token, TokenKind};

use super::Value;

/// One stored body token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoredToken {
    pub kind: TokenKind,
    pub text: String,
}

/// The tokens of one period-separated statement in a block body.
pub type StatementGroup = Vec<StoredToken>;

/// A `[:a :b | body]` value.
///
/// The body is kept as raw token data and replayed through the evaluator on
/// every call. Currying produces a new block that shares the same body and
/// records the arguments supplied so far in `bound`. A block written inside
/// another block's body keeps a copy of that body's variables in
/// `captured`, used once the enclosing call has returned.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeBlock {
    params: Vec<String>,
    bound: Vec<(String, Value)>,
    captured: Vec<(String, Value)>,
    body: Rc<[StatementGroup]>,
}

impl CodeBlock {
    pub fn new(params: Vec<String>, body: Vec<StatementGroup>) -> Self {
        CodeBlock {
            params,
            bound: Vec::new(),
            captured: Vec::new(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_captured(mut self, captured: Vec<(String, Value)>) -> Self {
        self.captured = captured;
        self
    }

    /// Parameters still waiting for an argument.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Arguments already applied by currying, in parameter order.
    pub fn bound(&self) -> &[(String, Value)] {
        &self.bound
    }

    pub fn captured(&self) -> &[(String, Value)] {
        &self.captured
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Bind the first `args.len()` remaining parameters.
    ///
    /// The caller guarantees `args.len() <= self.arity()`.
    #[must_use]
    pub fn curry(&self, args: Vec<Value>) -> CodeBlock {
        let applied = args.len().min(self.params.len());
        let mut bound = self.bound.clone();
        bound.extend(self.params[..applied].iter().cloned().zip(args));
        CodeBlock {
            params: self.params[applied..].to_vec(),
            bound,
            captured: self.captured.clone(),
            body: Rc::clone(&self.body),
        }
    }

    /// Body statement groups rebuilt as tokens, ready to evaluate.
    pub fn statements(&self) -> impl Iterator<Item = Vec<Token>> + '_ {
        self.body.iter().map(|group| {
            group
                .iter()
                .map(|stored| Token::synthetic(stored.kind, stored.text.clone()))
                .collect()
        })
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a CodeBlock(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, ":{param}")?;
        }
        f.write_str(")")
    }
}
