//! Diagnostics for fatal syntax errors.
//!
//! Recoverable errors in minitalk are ordinary values; only errors that
//! abort a statement reach this crate. Each one carries:
//! - an error code for searchability
//! - a message saying what went wrong
//! - a primary span pointing at the offending token
//! - optional notes and suggestions
//!
//! Emitters render diagnostics to a terminal or collect them for tests.

mod diagnostic;
pub mod emitter;
pub mod span_utils;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
