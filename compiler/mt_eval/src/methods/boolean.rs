//! Method dispatch for `Bool`, including the conditionals.
//!
//! Branch arguments that are blocks run; anything else is answered as-is.
//! The branch not taken answers nil.

use crate::dispatch::{Call, Companion, Message, Method};
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::Value;

use super::{invalid_conversion, mismatch, nullary, ok, unary};

pub(crate) fn lookup(receiver: &Value, selector: &str) -> Option<Message> {
    let message = match selector {
        "and" => unary("and", and),
        "eq" => unary("eq", eq),
        "not" => nullary("not", not),
        "and:" => unary("and:", and_then),
        "or:" => unary("or:", or_else),
        "ifTrue:" => Message::Unary(
            Method::new("ifTrue:", if_true).with_companions(&[Companion::IfFalse]),
        ),
        "ifFalse:" => Message::Unary(
            Method::new("ifFalse:", if_false).with_companions(&[Companion::IfTrue]),
        ),
        "toInteger" | "toBool" | "toString" | "toSymbol" | "toFloat" | "toCharacter" => {
            Message::Property(convert(flag(receiver), selector))
        }
        _ => return None,
    };
    Some(message)
}

fn flag(receiver: &Value) -> bool {
    let Value::Bool(b) = *receiver else {
        unreachable!("Bool method dispatched on {}", receiver.class_name())
    };
    b
}

/// `a & b`, both operands already evaluated.
fn and(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    match call.arg(0) {
        Value::Bool(other) => ok(Value::Bool(flag(receiver) && other)),
        other => mismatch(receiver, &other),
    }
}

fn eq(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ok(Value::Bool(call.arg(0) == *receiver))
}

fn not(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    ok(Value::Bool(!flag(receiver)))
}

/// `and:` evaluates its argument only when the receiver is true.
fn and_then(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    if flag(receiver) {
        interp.call_value(&call.arg(0), Vec::new())
    } else {
        ok(Value::Bool(false))
    }
}

/// `or:` evaluates its argument only when the receiver is false.
fn or_else(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    if flag(receiver) {
        ok(Value::Bool(true))
    } else {
        interp.call_value(&call.arg(0), Vec::new())
    }
}

fn branch(interp: &mut Interpreter<'_>, taken: bool, call: &Call, other: Companion) -> EvalResult {
    if taken {
        interp.call_value(&call.arg(0), Vec::new())
    } else if call.companion == Some(other) {
        interp.call_value(&call.arg(1), Vec::new())
    } else {
        ok(Value::Nil)
    }
}

fn if_true(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    branch(interp, flag(receiver), call, Companion::IfFalse)
}

fn if_false(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    branch(interp, !flag(receiver), call, Companion::IfTrue)
}

fn convert(flag: bool, selector: &str) -> Value {
    match selector {
        "toInteger" => Value::Integer(i64::from(flag)),
        "toBool" => Value::Bool(flag),
        "toString" => Value::string(flag.to_string()),
        "toSymbol" => Value::symbol(flag.to_string()),
        "toFloat" => invalid_conversion("Float"),
        _ => invalid_conversion("Character"),
    }
}
