//! Minitalk command-line driver.
//!
//! `mtc FILE` evaluates a script, `mtc -e EXPR` evaluates one expression
//! and echoes its results, and plain `mtc` reads statements from stdin,
//! with line editing and history when stdin is a terminal.

mod driver;
mod options;
mod repl;

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Once;

use mt_diagnostic::emitter::ColorMode;
use mt_diagnostic::ErrorCode;

use driver::Driver;
use options::{Command, Input, Options, USAGE};

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set.
///
/// `MINITALK_LOG_TREE=1` renders spans as an indented tree instead of flat
/// lines. Both write to stderr so results on stdout stay clean.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("MINITALK_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match options::parse(&args) {
        Ok(Command::Help) => {
            eprintln!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Explain(code)) => explain(&code),
        Ok(Command::Run(options)) => run(options),
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn explain(code: &str) -> ExitCode {
    match code.parse::<ErrorCode>() {
        Ok(code) => {
            println!("{code}: {}", code.description());
            ExitCode::SUCCESS
        }
        Err(()) => {
            eprintln!("error: unknown error code `{code}`");
            ExitCode::from(2)
        }
    }
}

fn run(options: Options) -> ExitCode {
    let color = if std::env::var_os("NO_COLOR").is_some() {
        ColorMode::Never
    } else {
        options.color
    };
    let is_tty = std::io::stderr().is_terminal();

    match options.input {
        Input::File(path) => {
            let source = match std::fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("error: cannot read {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            };
            let mut driver = Driver::new(color, is_tty, false);
            driver.run(&source);
            exit_status(&driver)
        }
        Input::Expression(expr) => {
            let mut driver = Driver::new(color, is_tty, !options.quiet);
            driver.run(&expr);
            exit_status(&driver)
        }
        Input::Interactive => {
            let mut driver = Driver::new(color, is_tty, !options.quiet);
            let terminal = std::io::stdin().is_terminal();
            if let Err(e) = repl::run(&mut driver, terminal, terminal && !options.quiet) {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

fn exit_status(driver: &Driver) -> ExitCode {
    if driver.errors() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
