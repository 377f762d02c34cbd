//! One evaluation session shared by every input mode.

use std::io::Stderr;

use mt_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use mt_diagnostic::Diagnostic;
use mt_eval::{stdout_handler, GlobalScope, Interpreter, Object, SharedPrintHandler};

/// Terminal output that also counts the diagnostics it shows.
struct Reporter {
    terminal: TerminalEmitter<Stderr>,
    errors: usize,
}

impl DiagnosticEmitter for Reporter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.errors += 1;
        self.terminal.emit(diagnostic);
    }

    fn flush(&mut self) {
        self.terminal.flush();
    }
}

pub(crate) struct Driver {
    scope: GlobalScope,
    reporter: Reporter,
    printer: SharedPrintHandler,
    echo: bool,
}

impl Driver {
    pub(crate) fn new(color: ColorMode, is_tty: bool, echo: bool) -> Self {
        Driver {
            scope: GlobalScope::new(),
            reporter: Reporter {
                terminal: TerminalEmitter::stderr(color, is_tty),
                errors: 0,
            },
            printer: stdout_handler(),
            echo,
        }
    }

    /// Evaluate `source` against the session scope, echoing printable
    /// results when enabled.
    pub(crate) fn run(&mut self, source: &str) {
        self.reporter.terminal.set_source(source);
        let results = Interpreter::new(&mut self.scope, &mut self.reporter)
            .with_print_handler(self.printer.clone())
            .evaluate_source(source);
        self.reporter.flush();

        if self.echo {
            for result in results.iter().filter(|r| r.is_printable()) {
                echo(result);
            }
        }
    }

    /// Fatal errors reported so far.
    pub(crate) fn errors(&self) -> usize {
        self.reporter.errors
    }
}

fn echo(result: &Object) {
    println!("{}", result.value);
}
