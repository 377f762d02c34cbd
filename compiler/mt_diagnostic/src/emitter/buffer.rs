//! In-memory emitter.

use std::sync::Arc;

use parking_lot::Mutex;

use super::DiagnosticEmitter;
use crate::Diagnostic;

/// Collects diagnostics instead of printing them.
///
/// Clones share one buffer, so a test can hand a clone to the evaluator
/// and inspect the original afterwards.
#[derive(Clone, Default)]
pub struct BufferEmitter {
    diagnostics: Arc<Mutex<Vec<Diagnostic>>>,
}

impl BufferEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Remove and return everything emitted so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }
}

impl DiagnosticEmitter for BufferEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.lock().push(diagnostic.clone());
    }

    fn flush(&mut self) {}
}
