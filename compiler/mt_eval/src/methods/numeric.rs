//! Method dispatch for numeric types (Integer, Float).
//!
//! Integer operations are checked: an overflow answers a `ValueError`
//! instead of wrapping. Mixing an Integer with a Float promotes to Float.

use std::cmp::Ordering;

use crate::dispatch::{Call, Companion, Message, Method};
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::Value;

use super::{done, invalid_conversion, mismatch, mismatch_error, nullary, ok, unary};

pub(crate) fn lookup(receiver: &Value, selector: &str) -> Option<Message> {
    let is_int = matches!(receiver, Value::Integer(_));
    let message = match selector {
        "plus" => unary("plus", add),
        "add" => unary("add", add),
        "minus" => unary("minus", sub),
        "sub" => unary("sub", sub),
        "mul" => unary("mul", mul),
        "div" => unary("div", div),
        "lt" => unary("lt", lt),
        "gt" => unary("gt", gt),
        "le" => unary("le", le),
        "ge" => unary("ge", ge),
        "eq" => unary("eq", eq),
        "max:" => unary("max:", max),
        "min:" => unary("min:", min),
        "abs" => nullary("abs", abs),
        "negated" => nullary("negated", negated),
        "squared" => nullary("squared", squared),
        "sqrt" => nullary("sqrt", sqrt),
        "isZero" => nullary("isZero", is_zero),
        "factorial" if is_int => nullary("factorial", factorial),
        "even" if is_int => nullary("even", even),
        "odd" if is_int => nullary("odd", odd),
        "timesRepeat:" if is_int => unary("timesRepeat:", times_repeat),
        "to:" if is_int => {
            Message::Unary(Method::new("to:", to).with_companions(&[Companion::Do]))
        }
        "toInteger" | "toFloat" | "toBool" | "toString" | "toSymbol" | "toCharacter" => {
            Message::Property(convert(receiver, selector))
        }
        _ => return None,
    };
    Some(message)
}

#[derive(Copy, Clone, Debug)]
enum Arith {
    Add,
    Sub,
    Mul,
    Div,
}

impl Arith {
    fn verb(self) -> &'static str {
        match self {
            Arith::Add => "addition",
            Arith::Sub => "subtraction",
            Arith::Mul => "multiplication",
            Arith::Div => "division",
        }
    }
}

fn overflow(operation: &str) -> Value {
    Value::value_error(format!("integer overflow in {operation}"))
}

fn arith(op: Arith, receiver: &Value, arg: &Value) -> Value {
    if let (Value::Integer(a), Value::Integer(b)) = (receiver, arg) {
        let (a, b) = (*a, *b);
        let result = match op {
            Arith::Add => a.checked_add(b),
            Arith::Sub => a.checked_sub(b),
            Arith::Mul => a.checked_mul(b),
            Arith::Div if b == 0 => return Value::zero_division(),
            Arith::Div => a.checked_div(b),
        };
        return result.map_or_else(|| overflow(op.verb()), Value::Integer);
    }
    let (Some(a), Some(b)) = (receiver.as_float(), arg.as_float()) else {
        return mismatch_error(receiver, arg);
    };
    match op {
        Arith::Add => Value::Float(a + b),
        Arith::Sub => Value::Float(a - b),
        Arith::Mul => Value::Float(a * b),
        Arith::Div if b == 0.0 => Value::zero_division(),
        Arith::Div => Value::Float(a / b),
    }
}

fn add(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ok(arith(Arith::Add, receiver, &call.arg(0)))
}

fn sub(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ok(arith(Arith::Sub, receiver, &call.arg(0)))
}

fn mul(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ok(arith(Arith::Mul, receiver, &call.arg(0)))
}

fn div(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ok(arith(Arith::Div, receiver, &call.arg(0)))
}

fn compare(receiver: &Value, arg: &Value) -> Option<Ordering> {
    match (receiver, arg) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        _ => receiver.as_float()?.partial_cmp(&arg.as_float()?),
    }
}

fn ordered(receiver: &Value, arg: &Value, test: fn(Ordering) -> bool) -> EvalResult {
    if !arg.is_numeric() {
        return mismatch(receiver, arg);
    }
    ok(Value::Bool(compare(receiver, arg).is_some_and(test)))
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

/// Numbers compare by value across Integer and Float; anything else is
/// simply not equal.
fn eq(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let equal = compare(receiver, &call.arg(0)) == Some(Ordering::Equal);
    ok(Value::Bool(equal))
}

fn max(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let arg = call.arg(0);
    match compare(receiver, &arg) {
        Some(Ordering::Less) => ok(arg),
        Some(_) => ok(receiver.clone()),
        None => mismatch(receiver, &arg),
    }
}

fn min(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let arg = call.arg(0);
    match compare(receiver, &arg) {
        Some(Ordering::Greater) => ok(arg),
        Some(_) => ok(receiver.clone()),
        None => mismatch(receiver, &arg),
    }
}

fn abs(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    ok(match *receiver {
        Value::Integer(n) => n.checked_abs().map_or_else(|| overflow("abs"), Value::Integer),
        Value::Float(x) => Value::Float(x.abs()),
        _ => unreachable!("abs dispatched on a non-number"),
    })
}

fn negated(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    ok(receiver.negated().unwrap_or_else(|| overflow("negation")))
}

fn squared(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    ok(arith(Arith::Mul, receiver, receiver))
}

fn sqrt(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    match receiver.as_float() {
        Some(x) if x < 0.0 => ok(Value::value_error("square root of a negative number")),
        Some(x) => ok(Value::Float(x.sqrt())),
        None => unreachable!("sqrt dispatched on a non-number"),
    }
}

fn is_zero(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    ok(Value::Bool(receiver.as_float() == Some(0.0)))
}

fn int_receiver(receiver: &Value) -> i64 {
    let Value::Integer(n) = *receiver else {
        unreachable!("integer method dispatched on {}", receiver.class_name())
    };
    n
}

fn factorial(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    let n = int_receiver(receiver);
    if n < 0 {
        return ok(Value::value_error("factorial is undefined for negative numbers"));
    }
    let product = (2..=n).try_fold(1i64, i64::checked_mul);
    ok(product.map_or_else(|| overflow("factorial"), Value::Integer))
}

fn even(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    ok(Value::Bool(int_receiver(receiver) % 2 == 0))
}

fn odd(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    ok(Value::Bool(int_receiver(receiver) % 2 != 0))
}

fn times_repeat(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let body = call.arg(0);
    for _ in 0..int_receiver(receiver).max(0) {
        interp.call_value(&body, Vec::new())?;
    }
    done()
}

/// `a to: b` answers the interval as an Array; `a to: b do: block` runs
/// the block once per element instead.
fn to(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    let start = int_receiver(receiver);
    let end = call.arg(0);
    let Value::Integer(end) = end else {
        return mismatch(receiver, &end);
    };
    if call.companion == Some(Companion::Do) {
        let body = call.arg(1);
        for i in start..=end {
            interp.call_value(&body, vec![Value::Integer(i)])?;
        }
        return done();
    }
    let len = (i128::from(end) - i128::from(start) + 1).max(0);
    let limit = interp.config().max_interval_size;
    if len > i128::try_from(limit).unwrap_or(i128::MAX) {
        return ok(Value::value_error(format!(
            "Interval of {len} elements exceeds the limit of {limit}"
        )));
    }
    ok(Value::array((start..=end).map(Value::Integer).collect()))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float to integer conversion truncates toward zero by definition"
)]
fn convert(receiver: &Value, selector: &str) -> Value {
    match (selector, receiver) {
        ("toInteger", Value::Integer(_)) => receiver.clone(),
        ("toInteger", Value::Float(x)) => {
            if x.is_finite() && x.abs() < 9.2e18 {
                Value::Integer(x.trunc() as i64)
            } else {
                super::cannot_convert(x, "Integer")
            }
        }
        ("toFloat", _) => receiver.as_float().map_or(Value::Nil, Value::Float),
        ("toBool", _) => Value::Bool(receiver.as_float() != Some(0.0)),
        ("toString", _) => Value::string(receiver.to_string()),
        ("toSymbol", Value::Integer(n)) => Value::symbol(n.to_string()),
        ("toCharacter", Value::Integer(n)) => u32::try_from(*n)
            .ok()
            .and_then(char::from_u32)
            .map_or_else(
                || Value::value_error("Value is not in valid Unicode range 0..0x10FFFF"),
                Value::Character,
            ),
        ("toSymbol", _) => invalid_conversion("Symbol"),
        _ => invalid_conversion("Character"),
    }
}
