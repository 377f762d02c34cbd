//! Method dispatch for `CodeBlock`.

use crate::dispatch::{Call, Companion, Message, Method};
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::value::CodeBlock;
use crate::{Object, Value};

use super::{mismatch, nullary, ok, unary};

pub(crate) fn lookup(selector: &str) -> Option<Message> {
    let message = match selector {
        "value" => nullary("value", value),
        "value:" => Message::Unary(
            Method::new("value:", value_with).with_companions(&[Companion::Value]),
        ),
        "valueWithArguments:" => unary("valueWithArguments:", value_with_arguments),
        "numArgs" => nullary("numArgs", num_args),
        "whileTrue:" => unary("whileTrue:", while_true),
        "whileFalse:" => unary("whileFalse:", while_false),
        _ => return None,
    };
    Some(message)
}

fn block(receiver: &Value) -> &CodeBlock {
    receiver
        .as_block()
        .unwrap_or_else(|| unreachable!("CodeBlock method dispatched on {}", receiver.class_name()))
}

fn value(interp: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    interp.call_block(block(receiver), Vec::new())
}

/// `value: a value: b ...`, one argument per keyword part.
fn value_with(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    interp.call_block(block(receiver), call.args.to_vec())
}

fn value_with_arguments(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    match call.arg(0) {
        Value::Array(items) => {
            let args = items.snapshot();
            interp.call_block(block(receiver), args)
        }
        other => mismatch(receiver, &other),
    }
}

fn num_args(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    let arity = block(receiver).arity();
    ok(Value::Integer(i64::try_from(arity).unwrap_or(i64::MAX)))
}

/// Run the body while the receiver answers `expected`. The loop itself
/// answers a silent nil.
fn run_while(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call, expected: bool) -> EvalResult {
    let condition = block(receiver);
    let body = call.arg(0);
    loop {
        let answer = interp.call_block(condition, Vec::new())?;
        match answer.value {
            Value::Bool(b) if b == expected => {}
            Value::Bool(_) => break,
            error @ Value::Error(_) => return ok(error),
            other => {
                return ok(Value::type_error(format!(
                    "loop condition answered {} instead of a Bool",
                    other.class_name()
                )))
            }
        }
        interp.call_value(&body, Vec::new())?;
    }
    Ok(Object::silent(Value::Nil))
}

fn while_true(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    run_while(interp, receiver, call, true)
}

fn while_false(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    run_while(interp, receiver, call, false)
}
