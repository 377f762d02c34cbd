//! Messages every value understands.
//!
//! [`reporting`] is consulted for Errors too. [`printing`] and
//! [`fallback`] only apply to ordinary values, after their class had no
//! answer, so `undefinedVar printString` still answers the NameError.

use crate::dispatch::{Call, Message, Method};
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::{Object, Value};

use super::{invalid_conversion, nullary, ok};

/// Inspection and printing to the output.
pub(crate) fn reporting(receiver: &Value, selector: &str) -> Option<Message> {
    let message = match selector {
        "class" => Message::Property(Value::symbol(receiver.class_name())),
        "isNil" => Message::Property(Value::Bool(matches!(receiver, Value::Nil))),
        "notNil" => Message::Property(Value::Bool(!matches!(receiver, Value::Nil))),
        "isError" => Message::Property(Value::Bool(receiver.is_error())),
        "yourself" => Message::Property(receiver.clone()),
        "printNl" => nullary("printNl", print_nl),
        "displayNl" => nullary("displayNl", display_nl),
        _ => return None,
    };
    Some(message)
}

/// Text forms of the receiver.
pub(crate) fn printing(receiver: &Value, selector: &str) -> Option<Message> {
    match selector {
        "printString" => Some(Message::Property(Value::string(receiver.to_string()))),
        "displayString" => Some(Message::Property(Value::string(receiver.display_string()))),
        _ => None,
    }
}

/// Equality and conversions a class does not define itself.
pub(crate) fn fallback(selector: &str) -> Option<Message> {
    let message = match selector {
        "eq" => Message::Unary(Method::new("eq", eq).accepting_errors()),
        "onError:" => Message::Unary(Method::new("onError:", unhandled).accepting_errors()),
        "toInteger" => Message::Property(invalid_conversion("Integer")),
        "toFloat" => Message::Property(invalid_conversion("Float")),
        "toBool" => Message::Property(invalid_conversion("Bool")),
        "toString" => Message::Property(invalid_conversion("String")),
        "toSymbol" => Message::Property(invalid_conversion("Symbol")),
        "toCharacter" => Message::Property(invalid_conversion("Character")),
        "toArray" => Message::Property(invalid_conversion("Array")),
        "toByteArray" => Message::Property(invalid_conversion("ByteArray")),
        _ => return None,
    };
    Some(message)
}

/// Print the printString form on its own line. The receiver is answered
/// silently so a REPL does not echo it a second time.
fn print_nl(interp: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    interp.print_line(&receiver.to_string());
    Ok(Object::silent(receiver.clone()))
}

fn display_nl(interp: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    interp.print_line(&receiver.display_string());
    Ok(Object::silent(receiver.clone()))
}

fn eq(_: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    ok(Value::Bool(call.arg(0) == *receiver))
}

/// A value that is not an Error has nothing to handle.
fn unhandled(_: &mut Interpreter<'_>, receiver: &Value, _: &Call) -> EvalResult {
    ok(receiver.clone())
}
