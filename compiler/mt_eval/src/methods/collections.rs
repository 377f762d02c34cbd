//! Method dispatch for `Array` and `ByteArray`.
//!
//! Indices are 1-based. `at:put:` and `at:insert:` change the receiver in
//! place and answer it, so every other reference sees the write. Iteration
//! runs over a snapshot, which lets a block modify the collection it is
//! walking.

use crate::dispatch::{Call, Companion, Message, Method};
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::value::CodeBlock;
use crate::Value;

use super::{done, invalid_conversion, mismatch, not_understood, ok, to_index, unary};

pub(crate) fn lookup(receiver: &Value, selector: &str) -> Option<Message> {
    match receiver {
        Value::Array(items) => array_lookup(&items.borrow(), selector),
        Value::ByteArray(bytes) => byte_array_lookup(&bytes.borrow(), selector),
        _ => None,
    }
}

fn len_value(len: usize) -> Value {
    Value::Integer(i64::try_from(len).unwrap_or(i64::MAX))
}

fn array_lookup(items: &[Value], selector: &str) -> Option<Message> {
    let message = match selector {
        "plus" => unary("plus", array_concat),
        "eq" => unary("eq", eq),
        "size" | "len" => Message::Property(len_value(items.len())),
        "first" => Message::Property(edge(items.first().cloned())),
        "last" => Message::Property(edge(items.last().cloned())),
        "isEmpty" => Message::Property(Value::Bool(items.is_empty())),
        "notEmpty" => Message::Property(Value::Bool(!items.is_empty())),
        "reversed" => Message::Property(Value::array(items.iter().rev().cloned().collect())),
        "at:" => Message::Unary(
            Method::new("at:", array_at)
                .with_companions(&[Companion::Put, Companion::Insert])
                .accepting_errors(),
        ),
        "includes:" => Message::Unary(Method::new("includes:", includes).accepting_errors()),
        "do:" => unary("do:", each),
        "collect:" | "map:" => unary("collect:", collect),
        "select:" => unary("select:", select),
        "reject:" => unary("reject:", reject),
        "detect:" => unary("detect:", detect),
        "inject:" => Message::Unary(
            Method::new("inject:", inject).with_companions(&[Companion::Into]),
        ),
        "toArray" => Message::Property(Value::array(items.to_vec())),
        "toByteArray" => Message::Property(
            items
                .iter()
                .map(as_byte)
                .collect::<Option<Vec<u8>>>()
                .map_or_else(|| invalid_conversion("ByteArray"), Value::byte_array),
        ),
        "toString" => Message::Property(Value::string(Value::array(items.to_vec()).to_string())),
        _ => return None,
    };
    Some(message)
}

fn byte_array_lookup(bytes: &[u8], selector: &str) -> Option<Message> {
    let message = match selector {
        "plus" => unary("plus", byte_concat),
        "eq" => unary("eq", eq),
        "size" | "len" => Message::Property(len_value(bytes.len())),
        "first" => Message::Property(edge(bytes.first().map(|b| Value::Integer(i64::from(*b))))),
        "last" => Message::Property(edge(bytes.last().map(|b| Value::Integer(i64::from(*b))))),
        "isEmpty" => Message::Property(Value::Bool(bytes.is_empty())),
        "reversed" => Message::Property(Value::byte_array(bytes.iter().rev().copied().collect())),
        "at:" => Message::Unary(
            Method::new("at:", byte_at).with_companions(&[Companion::Put]),
        ),
        "toByteArray" => Message::Property(Value::byte_array(bytes.to_vec())),
        "toArray" => Message::Property(Value::array(
            bytes.iter().map(|b| Value::Integer(i64::from(*b))).collect(),
        )),
        "toString" => Message::Property(invalid_conversion("String")),
        _ => return None,
    };
    Some(message)
}

/// `first` / `last` of an empty collection.
fn edge(element: Option<Value>) -> Value {
    element.unwrap_or_else(|| Value::value_error("Index 1 out of range"))
}

/// The byte an element stands for, if it is an Integer in `0..=255`.
pub(crate) fn as_byte(value: &Value) -> Option<u8> {
    match value {
        Value::Integer(n) => u8::try_from(*n).ok(),
        _ => None,
    }
}

fn invalid_byte(value: &Value) -> Value {
    Value::value_error(format!("Invalid byte value: {value}"))
}

fn eq(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ok(Value::Bool(call.arg(0) == *receiver))
}

fn array_concat(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    match (receiver, call.arg(0)) {
        (Value::Array(a), Value::Array(b)) => {
            let mut items = a.snapshot();
            items.extend(b.borrow().iter().cloned());
            ok(Value::array(items))
        }
        (_, other) => mismatch(receiver, &other),
    }
}

fn byte_concat(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    match (receiver, call.arg(0)) {
        (Value::ByteArray(a), Value::ByteArray(b)) => {
            let mut bytes = a.snapshot();
            bytes.extend_from_slice(&b.borrow());
            ok(Value::byte_array(bytes))
        }
        (_, other) => mismatch(receiver, &other),
    }
}

/// `at:`, `at:put:` and `at:insert:` on an Array.
fn array_at(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let Value::Array(items) = receiver else {
        unreachable!("Array method dispatched on {}", receiver.class_name())
    };
    let index = call.arg(0);
    if index.is_error() {
        return ok(index);
    }
    let len = items.borrow().len();
    let allow_end = call.companion == Some(Companion::Insert);
    let i = match to_index(&index, len, allow_end) {
        Ok(i) => i,
        Err(error) => return ok(error),
    };
    match call.companion {
        Some(Companion::Put) => items.borrow_mut()[i] = call.arg(1),
        Some(Companion::Insert) => items.borrow_mut().insert(i, call.arg(1)),
        _ => return ok(items.borrow()[i].clone()),
    }
    ok(receiver.clone())
}

/// `at:` and `at:put:` on a ByteArray.
fn byte_at(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let Value::ByteArray(bytes) = receiver else {
        unreachable!("ByteArray method dispatched on {}", receiver.class_name())
    };
    let len = bytes.borrow().len();
    let i = match to_index(&call.arg(0), len, false) {
        Ok(i) => i,
        Err(error) => return ok(error),
    };
    if call.companion == Some(Companion::Put) {
        let value = call.arg(1);
        let Some(byte) = as_byte(&value) else {
            return ok(invalid_byte(&value));
        };
        bytes.borrow_mut()[i] = byte;
        return ok(receiver.clone());
    }
    ok(Value::Integer(i64::from(bytes.borrow()[i])))
}

fn includes(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let Value::Array(items) = receiver else {
        unreachable!("Array method dispatched on {}", receiver.class_name())
    };
    let needle = call.arg(0);
    ok(Value::Bool(items.borrow().contains(&needle)))
}

fn elements(receiver: &Value) -> Vec<Value> {
    match receiver {
        Value::Array(items) => items.snapshot(),
        _ => unreachable!("Array method dispatched on {}", receiver.class_name()),
    }
}

/// The block argument of an iteration message, or the error to answer.
fn iteration_block(receiver: &Value, arg: &Value) -> Result<CodeBlock, Value> {
    match arg {
        Value::CodeBlock(block) if matches!(block.arity(), 1 | 2) => Ok((**block).clone()),
        Value::CodeBlock(_) => Err(Value::value_error("CodeBlock must have 1 or 2 arguments")),
        other => Err(super::mismatch_error(receiver, other)),
    }
}

/// Call an iteration block on one element. Two-parameter blocks also
/// receive the 1-based index, first.
fn call_with_element(
    interp: &mut Interpreter<'_>,
    block: &CodeBlock,
    index: usize,
    element: Value,
) -> EvalResult<Value> {
    let args = if block.arity() == 2 {
        vec![len_value(index + 1), element]
    } else {
        vec![element]
    };
    Ok(interp.call_block(block, args)?.into_value())
}

fn each(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let block = match iteration_block(receiver, &call.arg(0)) {
        Ok(block) => block,
        Err(error) => return ok(error),
    };
    for (i, element) in elements(receiver).into_iter().enumerate() {
        call_with_element(interp, &block, i, element)?;
    }
    done()
}

fn collect(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let block = match iteration_block(receiver, &call.arg(0)) {
        Ok(block) => block,
        Err(error) => return ok(error),
    };
    let mut mapped = Vec::new();
    for (i, element) in elements(receiver).into_iter().enumerate() {
        mapped.push(call_with_element(interp, &block, i, element)?);
    }
    ok(Value::array(mapped))
}

/// Keep the elements whose block answer is `keep`.
fn filter(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call, keep: bool) -> EvalResult {
    let block = match iteration_block(receiver, &call.arg(0)) {
        Ok(block) => block,
        Err(error) => return ok(error),
    };
    let mut kept = Vec::new();
    for (i, element) in elements(receiver).into_iter().enumerate() {
        let answer = call_with_element(interp, &block, i, element.clone())?;
        if answer == Value::Bool(keep) {
            kept.push(element);
        }
    }
    ok(Value::array(kept))
}

fn select(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    filter(interp, receiver, call, true)
}

fn reject(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    filter(interp, receiver, call, false)
}

fn detect(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let block = match iteration_block(receiver, &call.arg(0)) {
        Ok(block) => block,
        Err(error) => return ok(error),
    };
    for (i, element) in elements(receiver).into_iter().enumerate() {
        if call_with_element(interp, &block, i, element.clone())? == Value::Bool(true) {
            return ok(element);
        }
    }
    ok(Value::Nil)
}

/// `inject: initial into: [:acc :each | ...]`.
fn inject(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    if call.companion != Some(Companion::Into) {
        return ok(not_understood(receiver, "inject:"));
    }
    let Value::CodeBlock(block) = call.arg(1) else {
        return mismatch(receiver, &call.arg(1));
    };
    let mut acc = call.arg(0);
    for element in elements(receiver) {
        acc = interp.call_block(&block, vec![acc, element])?.into_value();
    }
    ok(acc)
}

#[cfg(test)]
mod tests;
