//! Message lookup.
//!
//! Every unary, binary and keyword send goes through [`lookup`], which asks
//! the receiver's class module for the selector and falls back to the
//! messages every value understands. The answer says how the evaluator must
//! treat the selector:
//!
//! - [`Message::Nullary`]: call now, no argument
//! - [`Message::Unary`]: needs one argument (binary operators, keywords)
//! - [`Message::Property`]: a plain value, pushed as-is
//! - [`Message::NotFound`]: not understood by this class
//!
//! Keyword selectors keep their colon (`at:`), so the keyword `and:` and
//! the `&` selector `and` are different messages. Multi-part keyword sends
//! (`at:put:`, `ifTrue:ifFalse:`) look up the primary keyword only. The
//! remaining parts must be among that method's [`Companion`]s and reach the
//! method through [`Call::companion`].

use std::fmt;

use mt_ir::BinaryOp;
use smallvec::SmallVec;

use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::methods;
use crate::{Object, Value};

/// Native body of a built-in message.
pub type MethodFn = fn(&mut Interpreter<'_>, &Value, &Call) -> EvalResult;

/// A built-in message bound to its native body.
#[derive(Clone, Copy)]
pub struct Method {
    pub selector: &'static str,
    pub call: MethodFn,
    pub companions: &'static [Companion],
    /// Run even when an argument is an Error, instead of returning it.
    pub accepts_errors: bool,
}

impl Method {
    pub const fn new(selector: &'static str, call: MethodFn) -> Self {
        Method {
            selector,
            call,
            companions: &[],
            accepts_errors: false,
        }
    }

    #[must_use]
    pub const fn with_companions(mut self, companions: &'static [Companion]) -> Self {
        self.companions = companions;
        self
    }

    #[must_use]
    pub const fn accepting_errors(mut self) -> Self {
        self.accepts_errors = true;
        self
    }

    /// Run the body, propagating the first Error argument unless this method
    /// handles errors itself.
    pub fn invoke(&self, interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
        if !self.accepts_errors {
            if let Some(error) = call.args.iter().find(|arg| arg.is_error()) {
                return Ok(Object::new(error.clone()));
            }
        }
        (self.call)(interp, receiver, call)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("selector", &self.selector)
            .field("companions", &self.companions)
            .field("accepts_errors", &self.accepts_errors)
            .finish_non_exhaustive()
    }
}

/// Answer of a message lookup.
#[derive(Clone, Debug)]
pub enum Message {
    Nullary(Method),
    Unary(Method),
    Property(Value),
    NotFound,
}

/// Secondary keyword of a multi-part send.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Companion {
    Put,
    Insert,
    IfTrue,
    IfFalse,
    Do,
    Into,
    Value,
}

impl Companion {
    pub fn from_keyword(keyword: &str) -> Option<Companion> {
        Some(match keyword {
            "put" => Companion::Put,
            "insert" => Companion::Insert,
            "ifTrue" => Companion::IfTrue,
            "ifFalse" => Companion::IfFalse,
            "do" => Companion::Do,
            "into" => Companion::Into,
            "value" => Companion::Value,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Companion::Put => "put",
            Companion::Insert => "insert",
            Companion::IfTrue => "ifTrue",
            Companion::IfFalse => "ifFalse",
            Companion::Do => "do",
            Companion::Into => "into",
            Companion::Value => "value",
        }
    }

    /// Whether the companion may appear more than once (`value:value:`).
    pub fn repeats(self) -> bool {
        matches!(self, Companion::Value)
    }
}

/// Arguments of one send.
#[derive(Clone, Debug, Default)]
pub struct Call {
    /// Primary argument first, then one per companion part.
    pub args: SmallVec<[Value; 2]>,
    pub companion: Option<Companion>,
}

impl Call {
    pub fn none() -> Self {
        Call::default()
    }

    pub fn unary(arg: Value) -> Self {
        let mut args = SmallVec::new();
        args.push(arg);
        Call {
            args,
            companion: None,
        }
    }

    /// Argument `index`, or nil when absent.
    pub fn arg(&self, index: usize) -> Value {
        self.args.get(index).cloned().unwrap_or(Value::Nil)
    }
}

/// Look up `selector` on `receiver`.
///
/// Errors understand only the messages that inspect or report them; the
/// evaluator turns every other send to an Error into the Error itself.
pub fn lookup(receiver: &Value, selector: &str) -> Message {
    let specific = match receiver {
        Value::Integer(_) | Value::Float(_) => methods::numeric::lookup(receiver, selector),
        Value::Bool(_) => methods::boolean::lookup(receiver, selector),
        Value::String(_) | Value::Symbol(_) | Value::Character(_) => {
            methods::text::lookup(receiver, selector)
        }
        Value::Array(_) | Value::ByteArray(_) => methods::collections::lookup(receiver, selector),
        Value::CodeBlock(_) => methods::block::lookup(selector),
        Value::Error(_) => {
            return methods::error::lookup(receiver, selector)
                .or_else(|| methods::common::reporting(receiver, selector))
                .unwrap_or(Message::NotFound);
        }
        Value::Nil => None,
    };
    specific
        .or_else(|| methods::common::reporting(receiver, selector))
        .or_else(|| methods::common::printing(receiver, selector))
        .or_else(|| methods::common::fallback(selector))
        .unwrap_or(Message::NotFound)
}

/// Look up the method behind a binary operator, trying each of its
/// selectors in turn.
pub fn lookup_binary(receiver: &Value, op: BinaryOp) -> Option<Method> {
    op.selectors()
        .iter()
        .find_map(|selector| match lookup(receiver, selector) {
            Message::Unary(method) => Some(method),
            _ => None,
        })
}

/// Check the parts after the primary keyword against the method's
/// companions. `Ok(None)` means a plain one-keyword send.
pub(crate) fn resolve_companion(method: &Method, parts: &[String]) -> Result<Option<Companion>, ()> {
    let Some((first, rest)) = parts.split_first() else {
        return Ok(None);
    };
    let companion = Companion::from_keyword(first)
        .filter(|c| method.companions.contains(c))
        .ok_or(())?;
    if rest.is_empty() || (companion.repeats() && rest.iter().all(|part| part == first)) {
        Ok(Some(companion))
    } else {
        Err(())
    }
}
