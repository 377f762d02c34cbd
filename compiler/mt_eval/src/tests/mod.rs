//! End-to-end evaluation tests, driven through source text.
//!
//! Unit tests for individual modules live next to them; these cover how
//! the pieces combine over whole statements and sessions.


use mt_diagnostic::emitter::BufferEmitter;
use mt_diagnostic::Diagnostic;

use crate::{
    buffer_handler, EvalConfig, GlobalScope, Interpreter, Object, SharedPrintHandler, Value,
};

/// A REPL-like session: one scope that outlives every evaluation.
pub(crate) struct Session {
    pub(crate) scope: GlobalScope,
    emitter: BufferEmitter,
    printer: SharedPrintHandler,
    config: EvalConfig,
}

impl Session {
    pub(crate) fn new() -> Self {
        Session {
            scope: GlobalScope::new(),
            emitter: BufferEmitter::new(),
            printer: buffer_handler(),
            config: EvalConfig::default(),
        }
    }

    pub(crate) fn with_config(config: EvalConfig) -> Self {
        Session {
            config,
            ..Session::new()
        }
    }

    /// Every result `source` produced.
    pub(crate) fn eval(&mut self, source: &str) -> Vec<Object> {
        let mut emitter = self.emitter.clone();
        Interpreter::new(&mut self.scope, &mut emitter)
            .with_config(self.config.clone())
            .with_print_handler(self.printer.clone())
            .evaluate_source(source)
    }

    /// Value of the last result `source` produced.
    pub(crate) fn value(&mut self, source: &str) -> Value {
        match self.eval(source).pop() {
            Some(result) => result.into_value(),
            None => panic!("`{source}` produced no result; diagnostics: {:?}", self.diagnostics()),
        }
    }

    /// printString of the last result.
    pub(crate) fn print(&mut self, source: &str) -> String {
        self.value(source).to_string()
    }

    pub(crate) fn printed(&self) -> String {
        self.printer.get_output()
    }

    pub(crate) fn diagnostics(&self) -> Vec<Diagnostic> {
        self.emitter.diagnostics()
    }

    /// Run `f` against a live interpreter over this session's scope.
    pub(crate) fn with_interpreter<R>(&mut self, f: impl FnOnce(&mut Interpreter<'_>) -> R) -> R {
        let mut emitter = self.emitter.clone();
        let mut interp = Interpreter::new(&mut self.scope, &mut emitter)
            .with_config(self.config.clone())
            .with_print_handler(self.printer.clone());
        f(&mut interp)
    }
}

/// printString of the last result of `source` in a fresh session.
pub(crate) fn print(source: &str) -> String {
    Session::new().print(source)
}

/// Value of the last result of `source` in a fresh session.
pub(crate) fn value(source: &str) -> Value {
    Session::new().value(source)
}
