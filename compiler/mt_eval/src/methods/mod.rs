//! Built-in messages.
//!
//! The class set is closed, so each module answers lookups with a `match`
//! on the selector instead of a per-value table.
//!
//! # Module Structure
//!
//! - [`numeric`]: `Integer` and `Float`
//! - [`boolean`]: `Bool`, including the conditional keywords
//! - [`text`]: `String`, `Symbol` and `Character`
//! - [`collections`]: `Array` and `ByteArray`
//! - [`block`]: `CodeBlock` invocation and loops
//! - [`error`]: inspecting and handling Error values
//! - [`common`]: messages every value understands

pub(crate) mod block;
pub(crate) mod boolean;
pub(crate) mod collections;
pub(crate) mod common;
pub(crate) mod error;
pub(crate) mod numeric;
pub(crate) mod text;

use std::fmt::Display;

use crate::dispatch::{Message, Method, MethodFn};
use crate::errors::EvalResult;
use crate::{Object, Value};

const fn nullary(selector: &'static str, call: MethodFn) -> Message {
    Message::Nullary(Method::new(selector, call))
}

const fn unary(selector: &'static str, call: MethodFn) -> Message {
    Message::Unary(Method::new(selector, call))
}

#[inline]
fn ok(value: Value) -> EvalResult {
    Ok(Object::new(value))
}

/// Result of loops and other sends run for their effect.
#[inline]
fn done() -> EvalResult {
    Ok(Object::silent(Value::Bool(true)))
}

/// A binary message whose argument has the wrong class.
fn mismatch(receiver: &Value, arg: &Value) -> EvalResult {
    ok(mismatch_error(receiver, arg))
}

pub(crate) fn mismatch_error(receiver: &Value, arg: &Value) -> Value {
    Value::type_error(format!(
        "Message doesn't exist for {} and {}",
        receiver.class_name(),
        arg.class_name()
    ))
}

pub(crate) fn not_understood(receiver: &Value, selector: &str) -> Value {
    Value::type_error(format!(
        "Message #{selector} doesn't exist for {}",
        receiver.class_name()
    ))
}

fn invalid_conversion(target: &str) -> Value {
    Value::type_error(format!("Invalid conversion to {target}"))
}

fn cannot_convert(text: impl Display, target: &str) -> Value {
    Value::value_error(format!("Cannot convert {text} to {target}"))
}

fn index_out_of_range(index: i64) -> Value {
    Value::value_error(format!("Index {index} out of range"))
}

/// Resolve a 1-based index argument against a collection of `len`
/// elements. `allow_end` admits `len + 1`, the insertion point past the
/// last element.
fn to_index(arg: &Value, len: usize, allow_end: bool) -> Result<usize, Value> {
    let Value::Integer(index) = *arg else {
        return Err(Value::type_error(format!(
            "Index must be an Integer, not {}",
            arg.class_name()
        )));
    };
    let limit = if allow_end { len + 1 } else { len };
    match usize::try_from(index) {
        Ok(i) if (1..=limit).contains(&i) => Ok(i - 1),
        _ => Err(index_out_of_range(index)),
    }
}

/// Parse the integer conversion of a text value.
fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
