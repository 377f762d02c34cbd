//! Command-line arguments, parsed by hand.

use std::path::PathBuf;

use mt_diagnostic::emitter::ColorMode;

pub(crate) const USAGE: &str = "\
Usage: mtc [options] [FILE]

Evaluates FILE, or reads statements from stdin when no FILE is given.

Options:
  -e EXPR           Evaluate EXPR and print its results
  --explain CODE    Describe a diagnostic code, e.g. E1004
  --no-color        Never color diagnostics
  -q, --quiet       Do not echo results or show the prompt
  -h, --help        Show this message

Environment:
  RUST_LOG            Enable tracing output (e.g. RUST_LOG=mt_eval=debug)
  MINITALK_LOG_TREE   Set to 1 for indented span trees
  NO_COLOR            Same as --no-color";

/// Where source text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Input {
    #[default]
    Interactive,
    File(PathBuf),
    Expression(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Options {
    pub(crate) input: Input,
    pub(crate) color: ColorMode,
    pub(crate) quiet: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Run(Options),
    Explain(String),
    Help,
}

/// Parse `args` (without the program name).
pub(crate) fn parse(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--explain" => {
                let code = iter.next().ok_or("--explain needs an error code")?;
                return Ok(Command::Explain(code.clone()));
            }
            "-e" => {
                let expr = iter.next().ok_or("-e needs an expression")?;
                set_input(&mut options, Input::Expression(expr.clone()))?;
            }
            "--no-color" => options.color = ColorMode::Never,
            "-q" | "--quiet" => options.quiet = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option `{flag}`"));
            }
            path => set_input(&mut options, Input::File(PathBuf::from(path)))?,
        }
    }

    Ok(Command::Run(options))
}

fn set_input(options: &mut Options, input: Input) -> Result<(), String> {
    if options.input != Input::Interactive {
        return Err("give at most one FILE or -e expression".to_string());
    }
    options.input = input;
    Ok(())
}
