//! Diagnostic Emitters
//!
//! - [`TerminalEmitter`]: human-readable output with optional color and a
//!   source snippet under each primary label
//! - [`BufferEmitter`]: collects diagnostics in memory for tests and
//!   embedders

mod buffer;
mod terminal;

pub use buffer::BufferEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Sink for diagnostics produced while evaluating.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}
