//! Minitalk Eval - single-pass evaluator for minitalk.
//!
//! Statements are parsed and executed in one left-to-right pass over the
//! lexer's tokens. Every message goes through [`lookup`], which answers
//! from a closed per-class table.
//!
//! # Architecture
//!
//! - `interpreter`: the statement state machine, literals and block calls
//! - `dispatch`: message lookup and the [`Method`] calling convention
//! - `methods`: the message tables, one module per value class
//! - `value`: [`Value`], [`CodeBlock`] and the heap wrappers
//! - `scope`: the [`Scope`] collaborator holding session variables
//!
//! Failures come in two tiers. A [`SyntaxError`] discards the statement and
//! is reported as a diagnostic. Everything else is a `Value::Error` that
//! flows on as an ordinary result.

mod config;
pub mod dispatch;
pub mod errors;
mod interpreter;
mod methods;
mod print_handler;
mod scope;
pub mod value;

pub use config::{EvalConfig, LAST_RESULT};
pub use dispatch::{lookup, Call, Companion, Message, Method};
pub use errors::{EvalResult, SyntaxError};
pub use interpreter::{evaluate, Interpreter};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use scope::{GlobalScope, Scope};
pub use value::{CodeBlock, ErrorKind, ErrorValue, Object, ObjectFlags, Value};

#[cfg(test)]
mod tests;
