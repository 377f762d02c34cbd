//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::span_utils::{is_renderable, LineOffsetTable};
use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// When given the source being evaluated, primary labels are rendered as
/// `line:col` with the offending line and a caret underline.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<(String, LineOffsetTable)>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Set the source text that subsequent diagnostics point into.
    pub fn set_source(&mut self, source: impl Into<String>) {
        let source = source.into();
        let table = LineOffsetTable::build(&source);
        self.source = Some((source, table));
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Write `line:col`, then the source line and an underline.
    fn write_location(&mut self, span: mt_ir::Span, message: &str, primary: bool) -> bool {
        let Some((source, table)) = &self.source else {
            return false;
        };
        if !is_renderable(span, source.len()) {
            return false;
        }

        let (line, col) = table.line_col(span.start);
        let text = table.line_text(source, line).to_string();
        let width = (span.len() as usize).max(1);
        let gutter = line.to_string().len();
        let marker = if primary { '^' } else { '-' };
        let underline = format!(
            "{}{}",
            " ".repeat(col as usize - 1),
            marker.to_string().repeat(width)
        );

        let _ = writeln!(self.writer, "  --> {line}:{col}");
        let _ = writeln!(self.writer, "{:gutter$} |", "");
        let _ = writeln!(self.writer, "{line} | {text}");
        let _ = write!(self.writer, "{:gutter$} | ", "");
        let color = if primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&format!("{underline} {message}"), color);
        let _ = writeln!(self.writer);
        true
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            if self.write_location(label.span, &label.message, label.is_primary) {
                continue;
            }
            if label.message.is_empty() {
                continue;
            }
            let _ = write!(self.writer, "  = ");
            let color = if label.is_primary {
                colors::ERROR
            } else {
                colors::SECONDARY
            };
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
