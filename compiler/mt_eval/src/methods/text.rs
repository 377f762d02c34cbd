//! Method dispatch for `String`, `Symbol` and `Character`.

use std::cmp::Ordering;

use crate::dispatch::{Call, Message};
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::Value;

use super::{
    cannot_convert, invalid_conversion, mismatch, nullary, ok, parse_bool, parse_float,
    parse_integer, to_index, unary,
};

pub(crate) fn lookup(receiver: &Value, selector: &str) -> Option<Message> {
    match receiver {
        Value::String(text) => string_lookup(text, selector),
        Value::Symbol(name) => symbol_lookup(name, selector),
        Value::Character(c) => character_lookup(*c, selector),
        _ => None,
    }
}

fn string_lookup(text: &str, selector: &str) -> Option<Message> {
    let message = match selector {
        "plus" => unary("plus", concat),
        "add" => unary("add", concat),
        "lt" => unary("lt", lt),
        "gt" => unary("gt", gt),
        "le" => unary("le", le),
        "ge" => unary("ge", ge),
        "eq" => unary("eq", eq),
        "size" => Message::Property(len_value(text.chars().count())),
        "isEmpty" => Message::Property(Value::Bool(text.is_empty())),
        "notEmpty" => Message::Property(Value::Bool(!text.is_empty())),
        "reversed" => Message::Property(Value::string(text.chars().rev().collect::<String>())),
        "asUppercase" => Message::Property(Value::string(text.to_uppercase())),
        "asLowercase" => Message::Property(Value::string(text.to_lowercase())),
        "at:" => unary("at:", string_at),
        "toString" => Message::Property(Value::string(text)),
        "toSymbol" => Message::Property(Value::symbol(text)),
        "toInteger" | "toFloat" | "toBool" | "toCharacter" => {
            Message::Property(parse_text(text, selector))
        }
        _ => return None,
    };
    Some(message)
}

fn symbol_lookup(name: &str, selector: &str) -> Option<Message> {
    let message = match selector {
        "eq" => unary("eq", eq),
        "size" => Message::Property(len_value(name.chars().count())),
        "toString" => Message::Property(Value::string(name)),
        "toSymbol" => Message::Property(Value::symbol(name)),
        "toInteger" | "toFloat" | "toBool" | "toCharacter" => {
            Message::Property(parse_text(name, selector))
        }
        _ => return None,
    };
    Some(message)
}

fn character_lookup(c: char, selector: &str) -> Option<Message> {
    let message = match selector {
        "lt" => unary("lt", lt),
        "gt" => unary("gt", gt),
        "le" => unary("le", le),
        "ge" => unary("ge", ge),
        "eq" => unary("eq", eq),
        "isVowel" => Message::Property(Value::Bool("aeiouAEIOU".contains(c))),
        "isLetter" => Message::Property(Value::Bool(c.is_alphabetic())),
        "isDigit" => Message::Property(Value::Bool(c.is_ascii_digit())),
        "asUppercase" => nullary("asUppercase", char_upper),
        "asLowercase" => nullary("asLowercase", char_lower),
        "toInteger" => Message::Property(Value::Integer(i64::from(u32::from(c)))),
        "toString" => Message::Property(Value::string(c.to_string())),
        "toSymbol" => Message::Property(Value::symbol(c.to_string())),
        "toCharacter" => Message::Property(Value::Character(c)),
        _ => return None,
    };
    Some(message)
}

fn len_value(len: usize) -> Value {
    Value::Integer(i64::try_from(len).unwrap_or(i64::MAX))
}

/// Conversions that parse the text of a String or Symbol.
fn parse_text(text: &str, selector: &str) -> Value {
    match selector {
        "toInteger" => parse_integer(text).map_or_else(|| cannot_convert(text, "Integer"), Value::Integer),
        "toFloat" => parse_float(text).map_or_else(|| cannot_convert(text, "Float"), Value::Float),
        "toBool" => parse_bool(text).map_or_else(|| cannot_convert(text, "Bool"), Value::Bool),
        _ => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Value::Character(c),
                _ => invalid_conversion("Character"),
            }
        }
    }
}

/// Order two values of the same textual class.
fn compare(receiver: &Value, arg: &Value) -> Option<Ordering> {
    match (receiver, arg) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Character(a), Value::Character(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn ordered(receiver: &Value, arg: &Value, test: fn(Ordering) -> bool) -> EvalResult {
    match compare(receiver, arg) {
        Some(ordering) => ok(Value::Bool(test(ordering))),
        None => mismatch(receiver, arg),
    }
}

fn lt(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ordered(receiver, &call.arg(0), Ordering::is_lt)
}

fn gt(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ordered(receiver, &call.arg(0), Ordering::is_gt)
}

fn le(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ordered(receiver, &call.arg(0), Ordering::is_le)
}

fn ge(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ordered(receiver, &call.arg(0), Ordering::is_ge)
}

/// Values of another class are never equal.
fn eq(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ok(Value::Bool(call.arg(0) == *receiver))
}

fn concat(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    match (receiver, call.arg(0)) {
        (Value::String(a), Value::String(b)) => ok(Value::string(format!("{}{}", &**a, &*b))),
        (_, other) => mismatch(receiver, &other),
    }
}

fn string_at(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let Value::String(text) = receiver else {
        unreachable!("String method dispatched on {}", receiver.class_name())
    };
    let count = text.chars().count();
    match to_index(&call.arg(0), count, false) {
        Ok(i) => ok(text.chars().nth(i).map_or(Value::Nil, Value::Character)),
        Err(error) => ok(error),
    }
}

fn map_char(receiver: &Value, f: fn(char) -> Option<char>) -> EvalResult {
    let Value::Character(c) = *receiver else {
        unreachable!("Character method dispatched on {}", receiver.class_name())
    };
    ok(Value::Character(f(c).unwrap_or(c)))
}

fn char_upper(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    map_char(receiver, |c| c.to_uppercase().next())
}

fn char_lower(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    map_char(receiver, |c| c.to_lowercase().next())
}
