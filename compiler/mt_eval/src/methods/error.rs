//! Messages an Error value answers itself.
//!
//! Everything else sent to an Error answers the same Error, which is how a
//! failure travels to the end of a statement.

use crate::dispatch::{Call, Message, Method};
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::Value;

use super::ok;

pub(crate) fn lookup(receiver: &Value, selector: &str) -> Option<Message> {
    let Value::Error(error) = receiver else {
        return None;
    };
    let message = match selector {
        "messageText" => Message::Property(Value::string(error.message())),
        "kind" => Message::Property(Value::symbol(error.kind().name())),
        "onError:" => Message::Unary(Method::new("onError:", on_error).accepting_errors()),
        _ => return None,
    };
    Some(message)
}

/// Handle the receiver: a one-parameter block gets the error, a
/// zero-parameter block just runs, any other argument is the answer.
fn on_error(interp: &mut Interpreter<'_>, receiver: &Value, call: &Call) -> EvalResult {
    match call.arg(0) {
        Value::CodeBlock(handler) if handler.arity() == 1 => {
            interp.call_block(&handler, vec![receiver.clone()])
        }
        Value::CodeBlock(handler) => interp.call_block(&handler, Vec::new()),
        other => ok(other),
    }
}
