//! Line-oriented interactive loop.
//!
//! Each line is evaluated once it closes every `(` and `[` it opened and
//! no cascade `;` is left waiting for its message. A blank line forces
//! evaluation of an unfinished entry so the error is reported instead of
//! waiting forever. `exit` on a line of its own ends the session.
//!
//! On a terminal, lines come from a rustyline editor with history: Ctrl-C
//! drops the pending entry and Ctrl-D ends the session. Piped input is
//! read line by line.

use std::io::{self, BufRead, StdinLock, Write};

use mt_ir::TokenKind;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::driver::Driver;

const PROMPT: &str = "mt> ";
const CONTINUATION: &str = "... ";
const EXIT: &str = "exit";

/// Net count of unclosed parentheses and brackets in `source`.
pub(crate) fn open_depth(source: &str) -> i64 {
    mt_lexer::tokenize(source)
        .iter()
        .map(|token| match token.kind {
            TokenKind::LParen | TokenKind::LBracket => 1,
            TokenKind::RParen | TokenKind::RBracket => -1,
            _ => 0,
        })
        .sum()
}

/// Whether the last significant token of `source` is a `;`.
fn ends_in_cascade(source: &str) -> bool {
    mt_lexer::tokenize(source)
        .iter()
        .rev()
        .find(|token| !token.kind.is_trivia())
        .is_some_and(|token| token.kind == TokenKind::Semicolon)
}

/// Whether `pending` should wait for another line before evaluating.
pub(crate) fn needs_more(pending: &str, last_line: &str) -> bool {
    !last_line.trim().is_empty() && (open_depth(pending) > 0 || ends_in_cascade(pending))
}

/// What the loop does after a line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Wait,
    Evaluate(String),
    Exit,
}

/// Lines collected toward one complete entry.
#[derive(Debug, Default)]
pub(crate) struct Entry {
    pending: String,
}

impl Entry {
    pub(crate) fn feed(&mut self, line: &str) -> Step {
        if self.pending.is_empty() {
            match line.trim() {
                "" => return Step::Wait,
                EXIT => return Step::Exit,
                _ => {}
            }
        }
        self.pending.push_str(line);
        self.pending.push('\n');
        if needs_more(&self.pending, line) {
            Step::Wait
        } else {
            Step::Evaluate(std::mem::take(&mut self.pending))
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop an unfinished entry.
    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }

    /// The unfinished entry left when input ends, if it holds anything.
    pub(crate) fn finish(self) -> Option<String> {
        (!self.pending.trim().is_empty()).then_some(self.pending)
    }
}

enum Read {
    Line(String),
    Interrupted,
    End,
}

enum LineSource {
    Editor(DefaultEditor),
    Plain(io::Lines<StdinLock<'static>>),
}

impl LineSource {
    fn open(terminal: bool) -> Self {
        if terminal {
            match DefaultEditor::new() {
                Ok(editor) => return LineSource::Editor(editor),
                Err(e) => tracing::warn!(error = %e, "line editor unavailable, reading plain lines"),
            }
        }
        LineSource::Plain(io::stdin().lock().lines())
    }

    fn read(&mut self, prompt: &str) -> io::Result<Read> {
        match self {
            LineSource::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    Ok(Read::Line(line))
                }
                Err(ReadlineError::Interrupted) => Ok(Read::Interrupted),
                Err(ReadlineError::Eof) => Ok(Read::End),
                Err(e) => Err(io::Error::other(e)),
            },
            LineSource::Plain(lines) => {
                if !prompt.is_empty() {
                    print!("{prompt}");
                    io::stdout().flush()?;
                }
                Ok(lines.next().transpose()?.map_or(Read::End, Read::Line))
            }
        }
    }
}

/// Read entries until `exit` or end of input. `terminal` selects the line
/// editor; prompts are shown only when `show_prompt` is set.
pub(crate) fn run(driver: &mut Driver, terminal: bool, show_prompt: bool) -> io::Result<()> {
    let mut source = LineSource::open(terminal);
    let mut entry = Entry::default();

    loop {
        let prompt = match (show_prompt, entry.is_empty()) {
            (false, _) => "",
            (true, true) => PROMPT,
            (true, false) => CONTINUATION,
        };
        match source.read(prompt)? {
            Read::Line(line) => match entry.feed(&line) {
                Step::Wait => {}
                Step::Evaluate(text) => {
                    tracing::debug!(len = text.len(), "evaluating entry");
                    driver.run(&text);
                }
                Step::Exit => return Ok(()),
            },
            Read::Interrupted => entry.clear(),
            Read::End => break,
        }
    }

    if let Some(rest) = entry.finish() {
        driver.run(&rest);
    }
    if show_prompt {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests;
